/*
 * This file is part of Easeguess.
 *
 * Copyright (C) 2025 Easeguess contributors
 *
 * Easeguess is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Easeguess is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Easeguess. If not, see <https://www.gnu.org/licenses/>.
 */

use crate::app::{App, COMPONENT_NAMES};
use crate::bezier::CubicBezier;
use super::ui_components::grade_color;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

const Y_LABEL_WIDTH: u16 = 6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Reference line at y = 0 or y = 1
    Guide,
    Guess,
    Answer,
    Both,
}

/// Rasterised curves for a `width` x `height` character grid, top row first.
/// Returns the grid and the (low, high) y bounds it covers.
pub fn plot_cells(
    guess: &CubicBezier,
    answer: Option<&CubicBezier>,
    width: usize,
    height: usize,
) -> (Vec<Vec<Cell>>, (f64, f64)) {
    if width == 0 || height == 0 {
        return (Vec::new(), (0.0, 1.0));
    }

    let samples = width.max(2);
    let (mut lo, mut hi) = guess.y_range(samples);
    if let Some(a) = answer {
        let (alo, ahi) = a.y_range(samples);
        lo = lo.min(alo);
        hi = hi.max(ahi);
    }

    let mut grid = vec![vec![Cell::Empty; width]; height];
    let row_of = |y: f64| -> usize {
        if height == 1 { return 0; }
        let frac = (hi - y) / (hi - lo);
        (frac * (height - 1) as f64).round().clamp(0.0, (height - 1) as f64) as usize
    };

    for guide in [0.0, 1.0] {
        let r = row_of(guide);
        for cell in grid[r].iter_mut() {
            *cell = Cell::Guide;
        }
    }

    for c in 0..width {
        let x = if width == 1 { 0.0 } else { c as f64 / (width - 1) as f64 };
        let gr = row_of(guess.ease(x));
        grid[gr][c] = Cell::Guess;
        if let Some(a) = answer {
            let ar = row_of(a.ease(x));
            grid[ar][c] = if grid[ar][c] == Cell::Guess { Cell::Both } else { Cell::Answer };
        }
    }

    (grid, (lo, hi))
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::raw(" "),
        Cell::Guide => Span::styled("┄", Style::default().fg(Color::DarkGray)),
        Cell::Guess => Span::styled("●", Style::default().fg(Color::Cyan)),
        Cell::Answer => Span::styled("●", Style::default().fg(Color::Magenta)),
        Cell::Both => Span::styled("◆", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    }
}

/// Render the guess curve, plus the answer once it has been revealed
pub fn render_curve_plot(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.reveal_answer {
        " Curve • cyan = guess, magenta = answer "
    } else {
        " Curve • cyan = guess "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width.saturating_sub(Y_LABEL_WIDTH) as usize;
    let height = inner.height.saturating_sub(1) as usize; // x-axis row
    if width < 2 || height < 2 {
        f.render_widget(Paragraph::new("Terminal too small").alignment(Alignment::Center), inner);
        return;
    }

    let answer = if app.reveal_answer { Some(&app.current_level().answer) } else { None };
    let (grid, (lo, hi)) = plot_cells(&app.guess, answer, width, height);

    let mut lines = Vec::with_capacity(height + 1);
    for (r, row) in grid.iter().enumerate() {
        let y = hi - (hi - lo) * r as f64 / (height - 1) as f64;
        let label = if r == 0 || r == height - 1 || r % (height / 4).max(1) == 0 {
            format!("{:5.2}│", y)
        } else {
            "     │".to_string()
        };
        let mut spans = vec![Span::styled(label, Style::default().fg(Color::DarkGray))];
        spans.extend(row.iter().map(|c| cell_span(*c)));
        lines.push(Line::from(spans));
    }

    let axis = format!("     └{}", "─".repeat(width));
    lines.push(Line::from(Span::styled(axis, Style::default().fg(Color::DarkGray))));
    f.render_widget(Paragraph::new(lines), inner);
}

/// Render the four control values with the selected one highlighted
pub fn render_control_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" Control points [step {:.2}] ", app.step));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut items: Vec<ListItem> = COMPONENT_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let value = app.guess.component(idx).unwrap_or(0.0);
            let marker = if idx == app.selected { "> " } else { "  " };
            let style = if idx == app.selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}{} = {:>6.2}", marker, name, value)).style(style)
        })
        .collect();

    items.push(ListItem::new(""));
    items.push(ListItem::new(format!("{}", app.guess)).style(Style::default().fg(Color::Gray)));

    if let Some(score) = app.last_score {
        items.push(ListItem::new(""));
        items.push(
            ListItem::new(format!("Last: {} ({})", score.points, score.grade.label()))
                .style(Style::default().fg(grade_color(score.grade))),
        );
    }
    if app.reveal_answer {
        items.push(
            ListItem::new(format!("Answer: {}", app.current_level().answer))
                .style(Style::default().fg(Color::Magenta)),
        );
    }

    f.render_widget(List::new(items), inner);
}
