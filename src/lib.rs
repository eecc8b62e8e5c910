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

//! Easeguess - guess the cubic Bezier easing curve
//!
//! This library provides the fixed level catalog, a cubic Bezier easing
//! evaluator, guess scoring, and the terminal game built on top of them.

pub mod error;
pub mod bezier;
pub mod levels;
pub mod scoring;
pub mod config;
pub mod logger;
pub mod cli;
pub mod app;
pub mod events;
pub mod ui;

pub use error::{EaseguessError, Result};
pub use levels::{catalog, Catalog, Edition, Level};

#[cfg(test)]
pub mod test_utils;
