// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shapes.

use crate::{Direction, Point, Rect};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Gap left between two circles placed with [`CircleShape::shift_outside`].
///
/// Keeps roundoff from making the circles overlap, which would remove their
/// interior tangents.
pub const SHIFT_MARGIN: f64 = 0.1;

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius,
        }
    }

    /// The smallest rectangle that encloses the circle.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let (x, y) = self.center.into();
        Rect::new(x - r, y - r, x + r, y + r)
    }

    /// Whether `other` lies entirely inside this circle, touching allowed.
    #[inline]
    pub fn contains_circle(&self, other: Circle) -> bool {
        let dr = self.radius - other.radius;
        dr >= 0.0 && self.center.distance_squared(other.center) <= dr * dr
    }
}

/// The side of an anchor circle to place another circle on.
///
/// `Top` is towards negative `y`, as on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Towards negative `x`.
    Left,
    /// Towards positive `x`.
    Right,
    /// Towards negative `y`.
    Top,
    /// Towards positive `y`.
    Bottom,
}

impl Side {
    /// Whether the placement moves along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    #[inline]
    fn sign(self) -> f64 {
        match self {
            Side::Left | Side::Top => -1.0,
            Side::Right | Side::Bottom => 1.0,
        }
    }
}

/// A circle an outline winds around in a given [`Direction`].
///
/// This is the unit a path is assembled from: the outline arrives on a
/// tangent, follows the circle in its direction, and leaves on another
/// tangent.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleShape {
    /// The center.
    pub center: Point,
    /// The radius, expected to be positive.
    pub radius: f64,
    /// Which way the outline winds around this circle.
    pub direction: Direction,
}

impl CircleShape {
    /// A new circle shape.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64, direction: Direction) -> CircleShape {
        CircleShape {
            center: center.into(),
            radius,
            direction,
        }
    }

    /// The plain circle, without a direction.
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// The square circumscribing the circle.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.circle().bounding_box()
    }

    /// The same circle with its center moved to `center`.
    #[inline]
    #[must_use]
    pub fn with_center(self, center: impl Into<Point>) -> CircleShape {
        CircleShape {
            center: center.into(),
            ..self
        }
    }

    /// Place `movable` against this circle on the given side.
    ///
    /// The returned circle keeps the radius and direction of `movable`, and
    /// its coordinate on the axis perpendicular to `side`. Along `side` it is
    /// pushed out until the two circles are [`SHIFT_MARGIN`] apart.
    ///
    /// When the perpendicular offset is larger than the sum of radii there
    /// is no such position and the moved coordinate is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphpath::{CircleShape, Direction, Side, SHIFT_MARGIN};
    ///
    /// let anchor = CircleShape::new((50.0, 40.0), 20.0, Direction::Clockwise);
    /// let corner = CircleShape::new((50.0, 30.0), 8.0, Direction::CounterClockwise);
    /// let left = anchor.shift_outside(corner, Side::Left);
    /// assert_eq!(left.center.y, 30.0);
    /// assert!(left.center.x < anchor.center.x);
    /// let gap = left.center.distance(anchor.center) - (20.0 + 8.0);
    /// assert!(gap > 0.0 && gap <= SHIFT_MARGIN);
    /// ```
    #[must_use]
    pub fn shift_outside(&self, movable: CircleShape, side: Side) -> CircleShape {
        let distance = self.radius + movable.radius;
        let offset = movable.center - self.center;
        if side.is_horizontal() {
            let dx = (distance * distance - offset.y * offset.y).sqrt() + SHIFT_MARGIN;
            movable.with_center((self.center.x + side.sign() * dx, movable.center.y))
        } else {
            let dy = (distance * distance - offset.x * offset.x).sqrt() + SHIFT_MARGIN;
            movable.with_center((movable.center.x, self.center.y + side.sign() * dy))
        }
    }
}

impl From<CircleShape> for Circle {
    #[inline]
    fn from(shape: CircleShape) -> Circle {
        shape.circle()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Circle, CircleShape, Direction, Point, Rect, Side, SHIFT_MARGIN};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn bounding_box() {
        let c = CircleShape::new((3.0, -2.0), 4.0, Direction::Clockwise);
        assert_eq!(c.bounding_box(), Rect::new(-1.0, -6.0, 7.0, 2.0));
    }

    #[test]
    fn contains_circle() {
        let big = Circle::new((0.0, 0.0), 10.0);
        assert!(big.contains_circle(Circle::new((3.0, 0.0), 7.0)));
        assert!(!big.contains_circle(Circle::new((3.1, 0.0), 7.0)));
        assert!(!Circle::new((0.0, 0.0), 1.0).contains_circle(big));
    }

    #[test]
    fn shift_outside_every_side() {
        let anchor = CircleShape::new((10.0, 20.0), 6.0, Direction::Clockwise);
        let movable = CircleShape::new((12.0, 17.0), 3.0, Direction::CounterClockwise);
        for side in [Side::Left, Side::Right, Side::Top, Side::Bottom] {
            let moved = anchor.shift_outside(movable, side);
            assert_eq!(moved.radius, movable.radius);
            assert_eq!(moved.direction, movable.direction);
            if side.is_horizontal() {
                assert_eq!(moved.center.y, movable.center.y);
            } else {
                assert_eq!(moved.center.x, movable.center.x);
            }
            // The margin is added along the axis, so the true gap is a bit less.
            let gap = moved.center.distance(anchor.center) - 9.0;
            assert!(gap > 0.0 && gap <= SHIFT_MARGIN + 1e-9, "{side:?}: {gap}");
        }
    }

    #[test]
    fn shift_outside_on_axis_is_exact() {
        let anchor = CircleShape::new((0.0, 0.0), 5.0, Direction::Clockwise);
        let movable = CircleShape::new((0.0, 0.0), 2.0, Direction::Clockwise);
        let right = anchor.shift_outside(movable, Side::Right);
        assert_approx_eq(right.center.x, 7.0 + SHIFT_MARGIN);
        let top = anchor.shift_outside(movable, Side::Top);
        assert_approx_eq(top.center.y, -7.0 - SHIFT_MARGIN);
        let left = anchor.shift_outside(movable, Side::Left);
        assert_approx_eq(left.center.distance(anchor.center), 7.0 + SHIFT_MARGIN);
        assert_eq!(left.center, Point::new(-7.0 - SHIFT_MARGIN, 0.0));
    }

    #[test]
    fn shift_outside_infeasible_is_nan() {
        let anchor = CircleShape::new((0.0, 0.0), 2.0, Direction::Clockwise);
        let far = CircleShape::new((0.0, 10.0), 1.0, Direction::Clockwise);
        let moved = anchor.shift_outside(far, Side::Right);
        assert!(moved.center.x.is_nan());
        assert_eq!(moved.center.y, 10.0);
        assert_eq!(moved.radius, 1.0);
    }

    #[test]
    fn shift_outside_leaves_input_untouched() {
        let anchor = CircleShape::new((0.0, 0.0), 2.0, Direction::Clockwise);
        let movable = CircleShape::new((1.0, 1.0), 1.0, Direction::Clockwise);
        let _ = anchor.shift_outside(movable, Side::Bottom);
        assert_eq!(movable.center, Point::new(1.0, 1.0));
    }
}
