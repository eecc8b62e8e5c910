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

use serde_json::json;

use crate::bezier::CubicBezier;
use crate::config::{effective_step, Settings};
use crate::error::Result;
use crate::levels::{catalog, Catalog, Level};
use crate::logger;
use crate::scoring::{score_guess, Score};

pub const X_RANGE: (f64, f64) = (0.0, 1.0);
pub const Y_RANGE: (f64, f64) = (-1.0, 2.0);
/// Guess components are kept on a 1/ROUND_SCALE grid
pub const ROUND_SCALE: f64 = 10_000.0;
pub const COMPONENT_NAMES: [&str; 4] = ["x1", "y1", "x2", "y2"];

pub struct App {
    pub catalog: Cow<'static, Catalog>,
    pub level_idx: usize,
    pub guess: CubicBezier,
    // selected component of the guess: 0..4 in [x1, y1, x2, y2] order
    pub selected: usize,
    pub step: f64,
    pub samples: usize,
    pub last_score: Option<Score>,
    pub show_result_popup: bool,
    pub reveal_answer: bool,
    pub status: String,
}

impl App {
    pub fn new(catalog: Cow<'static, Catalog>, settings: &Settings) -> Self {
        let mut app = Self {
            catalog,
            level_idx: 0,
            guess: CubicBezier::LINEAR,
            selected: 0,
            step: effective_step(settings.step),
            samples: settings.samples,
            last_score: None,
            show_result_popup: false,
            reveal_answer: false,
            status: String::new(),
        };
        app.on_level_changed();
        app
    }

    /// App over the built-in catalog chosen in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Cow::Borrowed(catalog(settings.edition)), settings)
    }

    pub fn current_level(&self) -> &Level {
        // catalogs are validated non-empty and level_idx never leaves bounds
        &self.catalog.all()[self.level_idx]
    }

    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.level_idx + 1, self.catalog.count())
    }

    pub fn select_next_component(&mut self) {
        self.selected = (self.selected + 1) % COMPONENT_NAMES.len();
    }

    pub fn select_prev_component(&mut self) {
        self.selected = (self.selected + COMPONENT_NAMES.len() - 1) % COMPONENT_NAMES.len();
    }

    /// Move the selected component by `delta`, clamped to the editable range.
    pub fn adjust_selected(&mut self, delta: f64) {
        let current = self.guess.component(self.selected).unwrap_or(0.0);
        let (lo, hi) = if self.selected % 2 == 0 { X_RANGE } else { Y_RANGE };
        // round to kill accumulated float noise from repeated steps
        let next = ((current + delta) * ROUND_SCALE).round() / ROUND_SCALE;
        self.guess.set_component(self.selected, next.clamp(lo, hi));
    }

    pub fn reset_guess(&mut self) {
        self.guess = CubicBezier::LINEAR;
        self.last_score = None;
        self.reveal_answer = false;
        self.status = "Guess reset".to_string();
    }

    pub fn submit(&mut self) -> Result<Score> {
        let level_id = self.current_level().id;
        let score = score_guess(&self.current_level().answer, &self.guess, self.samples)?;
        logger::log_event("guess_scored", json!({
            "catalog": self.catalog.name(),
            "level": level_id,
            "guess": self.guess.to_array(),
            "points": score.points,
            "grade": score.grade,
        }));
        self.last_score = Some(score);
        self.show_result_popup = true;
        self.status = format!("{} - {} points", score.grade.label(), score.points);
        Ok(score)
    }

    pub fn toggle_answer(&mut self) {
        if self.last_score.is_some() {
            self.reveal_answer = !self.reveal_answer;
        } else {
            self.status = "Submit a guess before revealing the answer".to_string();
        }
    }

    pub fn next_level(&mut self) -> bool {
        if self.level_idx + 1 < self.catalog.count() {
            self.level_idx += 1;
            self.on_level_changed();
            true
        } else {
            self.status = "Last level reached".to_string();
            false
        }
    }

    pub fn prev_level(&mut self) -> bool {
        if self.level_idx > 0 {
            self.level_idx -= 1;
            self.on_level_changed();
            true
        } else {
            self.status = "Already at the first level".to_string();
            false
        }
    }

    fn on_level_changed(&mut self) {
        self.guess = CubicBezier::LINEAR;
        self.selected = 0;
        self.last_score = None;
        self.show_result_popup = false;
        self.reveal_answer = false;
        let level = self.current_level();
        let (id, title) = (level.id, level.title.clone());
        logger::log_event("level_shown", json!({ "catalog": self.catalog.name(), "level": id }));
        self.status = format!("Level {}: {}", self.progress_label(), title);
    }
}
