// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use crate::{Point, Vec2};

/// A single line segment.
///
/// Tangent solvers return their results as lines: `p0` is the point the
/// tangent starts from (a point on the first circle, or the external point)
/// and `p1` is where it touches the second circle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Line {
        Line {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The length of the line.
    #[inline]
    pub fn length(self) -> f64 {
        self.delta().hypot()
    }

    /// The vector from `p0` to `p1`.
    #[inline]
    pub fn delta(self) -> Vec2 {
        self.p1 - self.p0
    }
}
