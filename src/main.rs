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

use std::borrow::Cow;
use std::io::stdout;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;

use easeguess::app::App;
use easeguess::cli::{merge_settings, resolve_catalog, run_cli, Cli};
use easeguess::config::{load_settings, Settings};
use easeguess::events::handle_key_event;
use easeguess::levels::Catalog;
use easeguess::logger;
use easeguess::ui::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A broken settings file should not lock the player out
    let saved = load_settings().unwrap_or_else(|e| {
        eprintln!("warning: {e}; using default settings");
        Settings::default()
    });
    let settings = merge_settings(&cli, saved);

    if settings.logging {
        logger::init_logging();
        logger::log_event("startup", serde_json::json!({
            "args": std::env::args().collect::<Vec<_>>(),
            "edition": settings.edition,
            "levels_path": settings.levels_path,
        }));
    }

    let catalog = match resolve_catalog(&settings) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: could not load levels: {e}");
            logger::log_event("fatal_error", serde_json::json!({ "error": e.to_string() }));
            std::process::exit(1);
        }
    };

    match run_cli(&cli, &settings, &catalog) {
        Ok(true) => return Ok(()),
        Ok(false) => {}
        Err(err) => {
            eprintln!("error: {err}");
            logger::log_event("fatal_error", serde_json::json!({ "error": err.to_string() }));
            std::process::exit(1);
        }
    }

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, catalog, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
        logger::log_event("fatal_error", serde_json::json!({ "error": err.to_string() }));
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    catalog: Cow<'static, Catalog>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut app = App::new(catalog, settings);

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key_event) = event::read()? {
                if handle_key_event(&mut app, key_event)? {
                    return Ok(());
                }
            }
        }
    }
}
