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

//! Cubic Bezier easing curves in the CSS `cubic-bezier(x1, y1, x2, y2)` form.
//!
//! The end points are fixed at (0,0) and (1,1); only the two interior
//! control points vary. Values outside [0,1] are legal on the y axis
//! (anticipation, overshoot) and are never clamped here.

use serde::{Deserialize, Serialize};

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;
const SOLVE_EPSILON: f64 = 1e-7;
/// Below this slope Newton steps overshoot, bisection takes over
const MIN_NEWTON_SLOPE: f64 = 1e-6;

/// Interior control points of a cubic Bezier easing curve.
///
/// On the wire this is always a four-number array `[x1, y1, x2, y2]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl From<[f64; 4]> for CubicBezier {
    fn from(v: [f64; 4]) -> Self {
        Self { x1: v[0], y1: v[1], x2: v[2], y2: v[3] }
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(c: CubicBezier) -> Self {
        c.to_array()
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::LINEAR
    }
}

impl std::fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

impl CubicBezier {
    pub const LINEAR: CubicBezier = CubicBezier { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Component by index in `[x1, y1, x2, y2]` order.
    pub fn component(&self, idx: usize) -> Option<f64> {
        self.to_array().get(idx).copied()
    }

    pub fn set_component(&mut self, idx: usize, value: f64) {
        match idx {
            0 => self.x1 = value,
            1 => self.y1 = value,
            2 => self.x2 = value,
            3 => self.y2 = value,
            _ => {}
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Both x components inside [0,1], which keeps x(t) monotonic so that the
    /// curve is a function of progress.
    pub fn is_valid_easing(&self) -> bool {
        (0.0..=1.0).contains(&self.x1) && (0.0..=1.0).contains(&self.x2)
    }

    /// Point on the curve at parameter `t`.
    pub fn point(&self, t: f64) -> (f64, f64) {
        (axis(self.x1, self.x2, t), axis(self.y1, self.y2, t))
    }

    /// Eased value for progress `x`. Progress is clamped to [0,1], the
    /// result is not.
    pub fn ease(&self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 { return 0.0; }
        if x >= 1.0 { return 1.0; }
        let t = self.solve_t(x);
        axis(self.y1, self.y2, t)
    }

    /// `n` evenly spaced (progress, eased) pairs including both ends.
    pub fn sample(&self, n: usize) -> Vec<(f64, f64)> {
        let n = n.max(2);
        (0..n)
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                (x, self.ease(x))
            })
            .collect()
    }

    /// Smallest and largest eased value over `n` samples.
    pub fn y_range(&self, n: usize) -> (f64, f64) {
        self.sample(n).iter().fold((0.0f64, 1.0f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)))
    }

    fn solve_t(&self, x: f64) -> f64 {
        // Newton first, it converges in a few rounds for typical curves
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = axis(self.x1, self.x2, t) - x;
            if err.abs() < SOLVE_EPSILON { return t; }
            let d = axis_derivative(self.x1, self.x2, t);
            if d.abs() < MIN_NEWTON_SLOPE { break; }
            t -= err / d;
        }

        // flat derivative or no convergence
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let xt = axis(self.x1, self.x2, t);
            if (xt - x).abs() < SOLVE_EPSILON { break; }
            if x > xt { lo = t; } else { hi = t; }
            t = lo + (hi - lo) / 2.0;
        }
        t
    }
}

/// One axis of the curve with end points 0 and 1, in polynomial form.
fn axis(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn axis_derivative(p1: f64, p2: f64, t: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}
