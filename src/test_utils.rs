/*
 * Test utilities and fixture helpers for Easeguess
 *
 * Common builders and assertions shared by the unit test modules.
 */

use std::borrow::Cow;
use std::io::Write;

use tempfile::NamedTempFile;

use crate::app::App;
use crate::bezier::CubicBezier;
use crate::config::Settings;
use crate::levels::{Catalog, Level};

/// Creates a level with a recognisable answer derived from its id
pub fn create_mock_level(id: u32) -> Level {
    let f = id as f64 / 100.0;
    Level::new(id, format!("Level {}", id), format!("Mock level number {}", id), [f, -f, 1.0 - f, 1.0 + f])
}

/// Creates a three-level catalog with non-contiguous ids
pub fn create_mock_catalog() -> Catalog {
    Catalog::new("Mock", vec![create_mock_level(5), create_mock_level(2), create_mock_level(9)])
        .expect("mock catalog is valid")
}

/// Creates an App over the mock catalog with default settings
pub fn create_mock_app() -> App {
    App::new(Cow::Owned(create_mock_catalog()), &Settings::default())
}

/// Writes serializable data to a temporary JSON file
pub fn create_temp_json_file<T: serde::Serialize>(data: &T) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    let json = serde_json::to_string_pretty(data).expect("Failed to serialize data");
    file.write_all(json.as_bytes()).expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// Asserts that two floating point values are approximately equal
pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "Values not approximately equal: {} vs {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// True when eased values never decrease across `n` samples
pub fn is_monotonic(curve: &CubicBezier, n: usize) -> bool {
    curve.sample(n).windows(2).all(|w| w[1].1 >= w[0].1 - 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{catalog, CatalogFile, Edition};

    #[test]
    fn test_mock_catalog_keeps_order() {
        let c = create_mock_catalog();
        let ids: Vec<u32> = c.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
        assert_eq!(c.get_by_id(9).unwrap().title, "Level 9");
    }

    #[test]
    fn test_mock_app() {
        let mut app = create_mock_app();
        assert_eq!(app.current_level().id, 5);
        assert!(app.next_level());
        assert_eq!(app.current_level().id, 2);
    }

    #[test]
    fn test_temp_json_catalog_loads() {
        let c = create_mock_catalog();
        let file = create_temp_json_file(&CatalogFile {
            name: c.name().to_string(),
            levels: c.all().to_vec(),
        });
        let loaded = Catalog::load(file.path()).unwrap();
        assert_eq!(loaded, c);
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0000001, 1e-6);
        assert_approx_eq(0.3, 0.1 + 0.2, 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.01);
    }

    #[test]
    fn test_monotonic_helper() {
        assert!(is_monotonic(&CubicBezier::LINEAR, 50));
        let ease = catalog(Edition::Basics).get_by_id(4).unwrap();
        assert!(is_monotonic(&ease.answer, 50));
        let anticipation = catalog(Edition::Classic).get_by_id(6).unwrap();
        assert!(!is_monotonic(&anticipation.answer, 50));
    }
}
