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

use serde::{Deserialize, Serialize};

use crate::bezier::CubicBezier;
use crate::error::{EaseguessError, Result};

/// Mean curve error at which a guess scores zero points.
pub const ZERO_POINTS_ERROR: f64 = 0.5;
pub const MIN_SAMPLES: usize = 2;
pub const MAX_SAMPLES: usize = 4096;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Perfect,
    Great,
    Good,
    Miss,
}

impl Grade {
    pub fn from_points(points: u8) -> Self {
        match points {
            95..=u8::MAX => Grade::Perfect,
            80..=94 => Grade::Great,
            60..=79 => Grade::Good,
            _ => Grade::Miss,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect",
            Grade::Great => "Great",
            Grade::Good => "Good",
            Grade::Miss => "Miss",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Mean absolute difference of the eased values
    pub curve_error: f64,
    /// Euclidean distance between the control tuples
    pub control_distance: f64,
    pub points: u8,
    pub grade: Grade,
}

/// Compare a guess against a level's answer over `samples` progress values.
pub fn score_guess(answer: &CubicBezier, guess: &CubicBezier, samples: usize) -> Result<Score> {
    if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&samples) {
        return Err(EaseguessError::invalid_input(format!(
            "samples must be within {}..={}, got {}",
            MIN_SAMPLES, MAX_SAMPLES, samples
        )));
    }
    if !guess.is_finite() {
        return Err(EaseguessError::invalid_input("guess has a non-finite component"));
    }
    if !guess.is_valid_easing() {
        return Err(EaseguessError::invalid_input("guess x1 and x2 must be within 0..=1"));
    }

    let curve_error = curve_error(answer, guess, samples);
    let control_distance = answer
        .to_array()
        .iter()
        .zip(guess.to_array().iter())
        .map(|(a, g)| (a - g).powi(2))
        .sum::<f64>()
        .sqrt();
    let points = points_for_error(curve_error);

    Ok(Score {
        curve_error,
        control_distance,
        points,
        grade: Grade::from_points(points),
    })
}

pub fn curve_error(a: &CubicBezier, b: &CubicBezier, samples: usize) -> f64 {
    let sa = a.sample(samples);
    let sb = b.sample(samples);
    let total: f64 = sa.iter().zip(sb.iter()).map(|((_, ya), (_, yb))| (ya - yb).abs()).sum();
    total / sa.len() as f64
}

pub fn points_for_error(err: f64) -> u8 {
    if err.is_nan() { return 0; }
    let v = 100.0 * (1.0 - err / ZERO_POINTS_ERROR);
    v.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{catalog, Edition};

    #[test]
    fn test_exact_answer_is_perfect() {
        for edition in Edition::ALL {
            for level in catalog(edition) {
                let score = score_guess(&level.answer, &level.answer, 64).unwrap();
                assert_eq!(score.points, 100, "level {}", level.id);
                assert_eq!(score.grade, Grade::Perfect);
                assert_eq!(score.control_distance, 0.0);
            }
        }
    }

    #[test]
    fn test_linear_guess_against_sharp_switch() {
        let sharp = CubicBezier::new(0.8, 0.0, 0.2, 1.0);
        let score = score_guess(&sharp, &CubicBezier::LINEAR, 64).unwrap();
        assert!(score.points < 100);
        assert!(score.curve_error > 0.0);
        assert!(score.control_distance > 0.0);
    }

    #[test]
    fn test_closer_guess_scores_higher() {
        let answer = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
        let near = CubicBezier::new(0.4, 0.0, 1.0, 1.0);
        let far = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
        let near_score = score_guess(&answer, &near, 64).unwrap();
        let far_score = score_guess(&answer, &far, 64).unwrap();
        assert!(near_score.points > far_score.points);
        assert!(near_score.curve_error < far_score.curve_error);
    }

    #[test]
    fn test_rejects_bad_samples() {
        let c = CubicBezier::LINEAR;
        assert!(score_guess(&c, &c, 1).is_err());
        assert!(score_guess(&c, &c, MAX_SAMPLES + 1).is_err());
        assert!(score_guess(&c, &c, MIN_SAMPLES).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_guess() {
        let guess = CubicBezier::new(0.5, f64::NAN, 0.5, 1.0);
        assert!(score_guess(&CubicBezier::LINEAR, &guess, 16).is_err());
    }

    #[test]
    fn test_rejects_guess_that_is_not_a_function() {
        let answer = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
        let guess = CubicBezier::new(2.0, 0.0, -1.0, 1.0);
        let err = score_guess(&answer, &guess, 64).unwrap_err();
        assert!(matches!(err, EaseguessError::InvalidInput(_)));
        assert!(score_guess(&answer, &CubicBezier::new(0.5, 0.0, 1.2, 1.0), 64).is_err());
        // y is free to overshoot
        assert!(score_guess(&answer, &CubicBezier::new(0.5, -0.8, 1.0, 1.8), 64).is_ok());
    }

    #[test]
    fn test_points_for_error() {
        assert_eq!(points_for_error(0.0), 100);
        assert_eq!(points_for_error(0.25), 50);
        assert_eq!(points_for_error(ZERO_POINTS_ERROR), 0);
        assert_eq!(points_for_error(3.0), 0);
        assert_eq!(points_for_error(f64::NAN), 0);
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_points(100), Grade::Perfect);
        assert_eq!(Grade::from_points(95), Grade::Perfect);
        assert_eq!(Grade::from_points(94), Grade::Great);
        assert_eq!(Grade::from_points(80), Grade::Great);
        assert_eq!(Grade::from_points(79), Grade::Good);
        assert_eq!(Grade::from_points(60), Grade::Good);
        assert_eq!(Grade::from_points(59), Grade::Miss);
        assert_eq!(Grade::from_points(0), Grade::Miss);
    }

    #[test]
    fn test_grade_serialization() {
        assert_eq!(serde_json::to_string(&Grade::Great).unwrap(), "\"great\"");
        assert_eq!(Grade::Miss.label(), "Miss");
    }
}
