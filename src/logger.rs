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

//! Opt-in JSON-lines event log. Nothing is written until `init_logging`
//! has been called, and write failures are ignored.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use lazy_static::lazy_static;
use serde_json::{json, Value};

use crate::config::config_dir;

const FALLBACK_LOG_PATH: &str = "/tmp/easeguess_logs.json";

lazy_static! {
    static ref LOG_FILE: Mutex<Option<File>> = Mutex::new(None);
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

pub fn log_path() -> PathBuf {
    config_dir().join("logs.json")
}

fn open_append(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

pub fn init_logging() {
    init_logging_at(&log_path());
}

pub fn init_logging_at(path: &Path) {
    let file = open_append(path).or_else(|| open_append(Path::new(FALLBACK_LOG_PATH)));
    if let Some(f) = file {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(f);
        }
    }
}

pub fn is_enabled() -> bool {
    LOG_FILE.lock().map(|g| g.is_some()).unwrap_or(false)
}

pub fn format_event(event: &str, data: Value) -> String {
    json!({
        "ts_ms": now_millis(),
        "event": event,
        "data": data,
    })
    .to_string()
}

/// Append one event line. A no-op while logging is disabled.
pub fn log_event(event: &str, data: Value) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(f) = guard.as_mut() {
            let _ = writeln!(f, "{}", format_event(event, data));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn shutdown() {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = None;
        }
    }

    #[test]
    fn test_format_event_shape() {
        let line = format_event("guess_scored", json!({ "level": 6, "points": 87 }));
        let v: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["event"], "guess_scored");
        assert_eq!(v["data"]["level"], 6);
        assert!(v["ts_ms"].as_u64().unwrap() > 0);
    }

    #[test]
    #[serial]
    fn test_log_event_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("logs.json");
        init_logging_at(&path);
        assert!(is_enabled());
        log_event("logger_test_first", json!({ "mode": "test" }));
        log_event("logger_test_second", json!({ "level": 1 }));
        shutdown();

        // other tests may log concurrently while the file is open
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().filter(|l| l.contains("logger_test_")).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"logger_test_first\""));
        assert!(lines[1].contains("\"logger_test_second\""));
        for line in content.lines() {
            assert!(serde_json::from_str::<Value>(line).is_ok());
        }
    }

    #[test]
    #[serial]
    fn test_disabled_logger_is_noop() {
        shutdown();
        assert!(!is_enabled());
        log_event("ignored", json!({}));
    }
}
