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

//! Command Line Interface
//!
//! Non-interactive access to the catalog and the scorer. Running without a
//! subcommand starts the TUI.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use crate::bezier::CubicBezier;
use crate::config::Settings;
use crate::levels::{catalog, Catalog, Edition, Level};
use crate::logger;
use crate::scoring::{score_guess, Score};

#[derive(Parser, Debug)]
#[command(name = "easeguess")]
#[command(version)]
#[command(about = "Easeguess - guess the cubic Bezier easing curve")]
#[command(long_about = "Easeguess - guess the cubic Bezier easing curve

Each level hides a cubic-bezier(x1, y1, x2, y2) easing curve. Shape your guess
with the arrow keys and submit it to see how close you got.

EXAMPLES:
    easeguess                          Play in the terminal (default)
    easeguess list                     List the levels of the active edition
    easeguess --edition basics show 1  Show one level with its answer
    easeguess guess 6 0.3 -0.3 1 0.3   Score a guess for level 6
    easeguess export > levels.json     Dump the active catalog as JSON

FILES:
    ~/.config/easeguess/settings.json  Settings
    ~/.config/easeguess/logs.json      Event log (with --logging)")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Built-in level set: classic or basics
    #[arg(long, global = true)]
    pub edition: Option<Edition>,

    /// Load levels from a JSON catalog instead of a built-in edition
    #[arg(long, global = true, value_name = "FILE")]
    pub levels: Option<PathBuf>,

    /// Append JSON event lines to the log file
    #[arg(long, global = true)]
    pub logging: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// List every level in order
    List,
    /// Show one level, including its answer
    Show {
        /// Level id
        id: u32,
    },
    /// Score a guess against a level's answer
    Guess {
        /// Level id
        id: u32,
        /// First control point x, within 0..=1
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        /// First control point y, may leave 0..=1
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        /// Second control point x, within 0..=1
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        /// Second control point y, may leave 0..=1
        #[arg(allow_negative_numbers = true)]
        y2: f64,
    },
    /// Print the active catalog as JSON
    Export,
}

/// Apply command-line overrides on top of the saved settings.
pub fn merge_settings(cli: &Cli, mut settings: Settings) -> Settings {
    if let Some(edition) = cli.edition {
        settings.edition = edition;
        // an explicit edition beats a levels file from the settings
        if cli.levels.is_none() {
            settings.levels_path = None;
        }
    }
    if let Some(path) = &cli.levels {
        settings.levels_path = Some(path.clone());
    }
    settings.logging |= cli.logging;
    settings
}

/// The catalog the session plays: an external file when configured,
/// otherwise the built-in edition.
pub fn resolve_catalog(settings: &Settings) -> crate::error::Result<Cow<'static, Catalog>> {
    match &settings.levels_path {
        Some(path) => Ok(Cow::Owned(Catalog::load(path)?)),
        None => Ok(Cow::Borrowed(catalog(settings.edition))),
    }
}

// ============================================================================
// CLI Execution
// ============================================================================

/// Runs a non-interactive command. Returns `Ok(false)` when the TUI should
/// start instead.
pub fn run_cli(cli: &Cli, settings: &Settings, catalog: &Catalog) -> anyhow::Result<bool> {
    match &cli.command {
        None | Some(Commands::Play) => Ok(false),
        Some(cmd) => {
            execute_command(cmd, settings, catalog)?;
            Ok(true)
        }
    }
}

fn execute_command(cmd: &Commands, settings: &Settings, catalog: &Catalog) -> anyhow::Result<()> {
    match cmd {
        Commands::Play => {}
        Commands::List => print!("{}", format_level_table(catalog)),
        Commands::Show { id } => {
            let level = catalog.get_by_id(*id)?;
            logger::log_event("level_shown", json!({ "catalog": catalog.name(), "level": id }));
            print!("{}", format_level(level));
        }
        Commands::Guess { id, x1, y1, x2, y2 } => {
            let level = catalog.get_by_id(*id)?;
            let guess = CubicBezier::new(*x1, *y1, *x2, *y2);
            let score = score_guess(&level.answer, &guess, settings.samples)?;
            logger::log_event("guess_scored", json!({
                "catalog": catalog.name(),
                "level": id,
                "guess": guess.to_array(),
                "points": score.points,
                "grade": score.grade,
            }));
            print!("{}", format_score(level, &guess, &score));
        }
        Commands::Export => println!("{}", catalog.to_json()?),
    }
    Ok(())
}

pub fn format_level_table(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} levels)", catalog.name(), catalog.count());
    let width = catalog.iter().map(|l| l.title.chars().count()).max().unwrap_or(0);
    for level in catalog {
        let _ = writeln!(out, "  {:>3}  {:<width$}  {}", level.id, level.title, level.answer, width = width);
    }
    out
}

pub fn format_level(level: &Level) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", level.id, level.title);
    if !level.description.is_empty() {
        let _ = writeln!(out, "  {}", level.description);
    }
    let _ = writeln!(out, "  answer: {}", level.answer);
    out
}

pub fn format_score(level: &Level, guess: &CubicBezier, score: &Score) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", level.id, level.title);
    let _ = writeln!(out, "  guess:            {}", guess);
    let _ = writeln!(out, "  answer:           {}", level.answer);
    let _ = writeln!(out, "  curve error:      {:.4}", score.curve_error);
    let _ = writeln!(out, "  control distance: {:.4}", score.control_distance);
    let _ = writeln!(out, "  result:           {} ({} / 100)", score.grade.label(), score.points);
    out
}
