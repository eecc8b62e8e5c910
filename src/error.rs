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

//! Unified error handling for Easeguess
//!
//! A single error type is shared by the catalog, the settings layer and the
//! scoring helpers. The binary wraps it in `anyhow` at the top level.

use std::io;
use std::path::PathBuf;

/// Result type alias using EaseguessError
pub type Result<T> = std::result::Result<T, EaseguessError>;

#[derive(thiserror::Error, Debug)]
pub enum EaseguessError {
    // ============================================================================
    // Catalog Errors
    // ============================================================================
    #[error("Level not found: {0}")]
    NotFound(u32),

    #[error("Duplicate level id: {0}")]
    DuplicateId(u32),

    #[error("Invalid level {id}: {reason}")]
    InvalidLevel {
        id: u32,
        reason: String,
    },

    #[error("Catalog contains no levels")]
    EmptyCatalog,

    // ============================================================================
    // I/O and Serialization Errors
    // ============================================================================
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration and Input Errors
    // ============================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EaseguessError {
    /// Create a config error from a string
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_level(id: u32, reason: impl Into<String>) -> Self {
        Self::InvalidLevel { id, reason: reason.into() }
    }

    /// True for the lookup miss raised by `Catalog::get_by_id`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = EaseguessError::NotFound(9999);
        assert_eq!(err.to_string(), "Level not found: 9999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_level_display() {
        let err = EaseguessError::invalid_level(3, "title is empty");
        assert_eq!(err.to_string(), "Invalid level 3: title is empty");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: EaseguessError = io_err.into();
        assert!(matches!(err, EaseguessError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: EaseguessError = json_err.into();
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }
}
