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

pub mod ui_components;
pub mod ui_curve_editor;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::App;
use ui_components::{render_bottom_bar, render_result_popup};
use ui_curve_editor::{render_control_panel, render_curve_plot};

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();

    // Layout: header | description | editor | bottom bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(f, app, chunks[0]);
    render_description(f, app, chunks[1]);

    // Horizontal split: left = graph, right = control points
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);
    render_curve_plot(f, app, body[0]);
    render_control_panel(f, app, body[1]);

    render_bottom_bar(f, app, chunks[3]);

    if app.show_result_popup {
        render_result_popup(f, app, size);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let level = app.current_level();
    let header = Line::from(vec![
        Span::styled(" Easeguess ", Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {} ", app.catalog.name()), Style::default().fg(Color::Gray)),
        Span::styled(format!("│ Level {} ", app.progress_label()), Style::default().fg(Color::Yellow)),
        Span::styled(format!("│ #{} {}", level.id, level.title), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ]);
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);
    f.render_widget(Paragraph::new(header).block(block), area);
}

fn render_description(f: &mut Frame, app: &App, area: Rect) {
    let level = app.current_level();
    let text = if level.description.is_empty() { "(no description)" } else { level.description.as_str() };
    let p = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).title(" Description "));
    f.render_widget(p, area);
}
