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

use crate::app::App;
use crate::scoring::Grade;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Helper function to create a centered rect using up certain percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Perfect => Color::Green,
        Grade::Great => Color::Cyan,
        Grade::Good => Color::Yellow,
        Grade::Miss => Color::Red,
    }
}

pub fn render_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    let keys = [
        ("←→", "select"),
        ("↑↓", "adjust"),
        ("Shift", "fine"),
        ("Enter", "submit"),
        ("a", "answer"),
        ("r", "reset"),
        ("n/p", "level"),
        ("q", "quit"),
    ];
    let mut spans = Vec::new();
    for (k, label) in keys {
        spans.push(Span::styled(format!(" {} ", k), Style::default().fg(Color::Black).bg(Color::Gray)));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(app.status.clone(), Style::default().fg(Color::Yellow))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_result_popup(f: &mut Frame, app: &App, size: Rect) {
    let Some(score) = app.last_score else { return };
    let area = centered_rect(50, 40, size);
    let color = grade_color(score.grade);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Result ")
        .border_style(Style::default().fg(color));

    let level = app.current_level();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  {} / 100", score.grade.label(), score.points),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Curve error      {:.4}", score.curve_error)),
        Line::from(format!("Control distance {:.4}", score.control_distance)),
        Line::from(format!("Your guess       {}", app.guess)),
        Line::from(format!("Level            #{} {}", level.id, level.title)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter close • a reveal answer • n next level",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center).block(block), area);
}
