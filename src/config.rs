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

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EaseguessError, Result};
use crate::levels::Edition;
use crate::scoring::{MAX_SAMPLES, MIN_SAMPLES};

pub const MAX_STEP: f64 = 0.5;
/// Smallest step whose fine fraction (step / 5) still survives rounding
pub const MIN_STEP: f64 = 0.005;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub edition: Edition,
    /// Optional external catalog, replaces the built-in edition when set
    #[serde(default)]
    pub levels_path: Option<PathBuf>,
    /// Increment applied by the arrow keys
    #[serde(default = "default_step")]
    pub step: f64,
    /// Progress samples used when scoring a guess
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default)]
    pub logging: bool,
}

fn default_step() -> f64 { 0.05 }
fn default_samples() -> usize { 64 }

impl Default for Settings {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            levels_path: None,
            step: default_step(),
            samples: default_samples(),
            logging: false,
        }
    }
}

/// Directory holding settings and logs.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Path::new(&xdg).join("easeguess");
        }
    }
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return Path::new(&home).join(".config").join("easeguess");
        }
    }
    PathBuf::from("/etc/easeguess")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn validate_settings(settings: &Settings) -> Result<()> {
    if !(MIN_STEP..=MAX_STEP).contains(&settings.step) {
        return Err(EaseguessError::config(format!("step must be within {}..={}", MIN_STEP, MAX_STEP)));
    }
    if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&settings.samples) {
        return Err(EaseguessError::config(format!(
            "samples must be within {}..={}",
            MIN_SAMPLES, MAX_SAMPLES
        )));
    }
    if let Some(p) = &settings.levels_path {
        if p.as_os_str().is_empty() {
            return Err(EaseguessError::config("levels_path is empty"));
        }
    }
    Ok(())
}

/// Step bounded to the usable range, default when not a number.
pub fn effective_step(step: f64) -> f64 {
    if step.is_nan() { return default_step(); }
    step.clamp(MIN_STEP, MAX_STEP)
}

/// Settings from disk, or defaults when no file exists yet.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path).map_err(|e| {
        EaseguessError::config(format!("Failed to read settings file: {}", e))
    })?;
    let settings: Settings = serde_json::from_str(&content).map_err(|e| {
        EaseguessError::config(format!("Failed to parse settings JSON: {}", e))
    })?;
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    validate_settings(settings)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
