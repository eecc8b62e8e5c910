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

//! The level catalog.
//!
//! Two fixed editions ship with the crate. Both are built once on first use
//! and never change afterwards. External catalogs in the same JSON shape can
//! be loaded and go through the same validation.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::bezier::CubicBezier;
use crate::error::{EaseguessError, Result};

/// Upper bound for catalog files read from disk.
pub const MAX_CATALOG_FILE_BYTES: u64 = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub answer: CubicBezier,
}

impl Level {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>, answer: [f64; 4]) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// Ten levels, from gentle easings to elastic snaps.
    #[default]
    Classic,
    /// The four CSS keyword curves.
    Basics,
}

impl Edition {
    pub const ALL: [Edition; 2] = [Edition::Classic, Edition::Basics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Edition::Classic => "classic",
            Edition::Basics => "basics",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Edition {
    type Err = EaseguessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Edition::Classic),
            "basics" => Ok(Edition::Basics),
            other => Err(EaseguessError::invalid_input(format!(
                "unknown edition '{}' (expected classic or basics)",
                other
            ))),
        }
    }
}

/// Ordered, immutable collection of levels. Declaration order is the
/// progression order.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    name: String,
    levels: Vec<Level>,
}

/// JSON shape of a catalog on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub name: String,
    pub levels: Vec<Level>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists, zero or duplicate ids, blank
    /// titles and non-finite answers.
    pub fn new(name: impl Into<String>, levels: Vec<Level>) -> Result<Self> {
        let catalog = Self { name: name.into(), levels };
        catalog.validate()?;
        Ok(catalog)
    }

    fn builtin(name: &str, entries: &[(u32, &str, &str, [f64; 4])]) -> Self {
        Self {
            name: name.to_string(),
            levels: entries
                .iter()
                .map(|(id, title, description, answer)| Level::new(*id, *title, *description, *answer))
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() { return Err(EaseguessError::EmptyCatalog); }
        let mut seen = HashSet::with_capacity(self.levels.len());
        for level in &self.levels {
            if level.id == 0 { return Err(EaseguessError::invalid_level(0, "id must be positive")); }
            if !seen.insert(level.id) { return Err(EaseguessError::DuplicateId(level.id)); }
            if level.title.trim().is_empty() {
                return Err(EaseguessError::invalid_level(level.id, "title is empty"));
            }
            if !level.answer.is_finite() {
                return Err(EaseguessError::invalid_level(level.id, "answer has a non-finite component"));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every level in declaration order.
    pub fn all(&self) -> &[Level] {
        &self.levels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.levels.iter()
    }

    pub fn count(&self) -> usize {
        self.levels.len()
    }

    /// Exact id match, `NotFound` otherwise.
    pub fn get_by_id(&self, id: u32) -> Result<&Level> {
        self.levels
            .iter()
            .find(|l| l.id == id)
            .ok_or(EaseguessError::NotFound(id))
    }

    /// Index of `id` in declaration order.
    pub fn position(&self, id: u32) -> Option<usize> {
        self.levels.iter().position(|l| l.id == id)
    }

    pub fn next_after(&self, id: u32) -> Option<&Level> {
        self.position(id).and_then(|i| self.levels.get(i + 1))
    }

    pub fn previous_before(&self, id: u32) -> Option<&Level> {
        self.position(id)
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.levels.get(i))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(data)?;
        Self::new(file.name, file.levels)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile { name: self.name.clone(), levels: self.levels.clone() };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let size = fs::metadata(path)?.len();
        if size > MAX_CATALOG_FILE_BYTES {
            return Err(EaseguessError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: MAX_CATALOG_FILE_BYTES,
            });
        }
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

const CLASSIC_LEVELS: &[(u32, &str, &str, [f64; 4])] = &[
    (1, "Ease", "自然な加速と減速。", [0.25, 0.0, 0.75, 1.0]),
    (2, "Ease In", "ゆっくり始まって加速する。", [0.4, 0.0, 1.0, 0.6]),
    (3, "Ease Out", "素早く登場し、ふわりと着地する。", [0.0, 0.4, 0.6, 1.0]),
    (4, "Sharp Switch", "キレのある動き。中間を一瞬で駆け抜ける。", [0.8, 0.0, 0.2, 1.0]),
    (5, "Material UI", "モダンなアプリの挙動。反応は早く、余韻は長く。", [0.2, 0.0, 0.2, 1.0]),
    (6, "Anticipation", "一度後ろに下がって勢いをつける。", [0.3, -0.3, 1.0, 0.3]),
    (7, "Overshoot", "勢いあまって通り過ぎ、少し戻ってくる。", [0.0, 0.7, 0.7, 1.3]),
    (8, "Sticky", "粘り気のある動き。ギリギリまで動かない。", [1.0, 0.0, 0.8, 1.0]),
    (9, "Gentle Sine", "主張しない、穏やかで柔らかい波のような動き。", [0.45, 0.05, 0.55, 0.95]),
    (10, "Elastic Snap", "大きく引いて、強烈に弾けるゴムのような動き。", [0.7, -0.3, 0.3, 1.3]),
];

const BASICS_LEVELS: &[(u32, &str, &str, [f64; 4])] = &[
    (1, "Ease In", "CSS の ease-in。ゆっくり始まり、最後まで加速し続ける。", [0.42, 0.0, 1.0, 1.0]),
    (2, "Ease Out", "CSS の ease-out。勢いよく始まり、静かに止まる。", [0.0, 0.0, 0.58, 1.0]),
    (3, "Ease In Out", "CSS の ease-in-out。両端がなめらかな対称の動き。", [0.42, 0.0, 0.58, 1.0]),
    (4, "Ease", "CSS の ease。ブラウザの既定のタイミング。", [0.25, 0.1, 0.25, 1.0]),
];

lazy_static! {
    static ref CLASSIC: Catalog = Catalog::builtin("Classic", CLASSIC_LEVELS);
    static ref BASICS: Catalog = Catalog::builtin("Basics", BASICS_LEVELS);
}

/// Process-wide catalog for an edition.
pub fn catalog(edition: Edition) -> &'static Catalog {
    match edition {
        Edition::Classic => &CLASSIC,
        Edition::Basics => &BASICS,
    }
}
