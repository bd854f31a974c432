// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tangent lines between circles, and from points to circles.

use arrayvec::ArrayVec;

use crate::{Circle, Line, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The common tangents of two circles.
///
/// Each line starts on the first circle and ends on the second. There are
/// 0, 2 or 4 of them, see [`tangents_of_two_circles`] for their order.
pub type TangentSet = ArrayVec<Line, 4>;

/// Find the common tangent segments of two circles.
///
/// The result holds the two exterior tangents followed by the two interior
/// ones; a family that doesn't exist is left out. Within each family the
/// tangent touching the first circle on the right of the line from `c1` to
/// `c2` (in a y-down space) comes first. Callers index into the result, so
/// this order is part of the contract.
///
/// - Neither family exists when one circle contains the other, including when
///   they touch from inside: the result is empty.
/// - Interior tangents exist only when the circles don't overlap. For circles
///   touching from outside, both interior segments collapse onto the contact
///   point, up to roundoff.
///
/// Each tangent has a unit normal `n` with `c1.center + r1 n` on the first
/// circle and `c2.center ± r2 n` on the second; orthogonality to the segment
/// reduces to the linear equation `v · n = (r1 ∓ r2) / d`, where `v` is the
/// unit vector between the centers and `d` their distance.
///
/// # Examples
///
/// ```
/// use morphpath::{tangents_of_two_circles, Circle, Point};
///
/// let tangents = tangents_of_two_circles(
///     Circle::new((0.0, 0.0), 5.0),
///     Circle::new((20.0, 0.0), 5.0),
/// );
/// assert_eq!(tangents.len(), 4);
/// assert_eq!(tangents[0].p0, Point::new(0.0, 5.0));
/// assert_eq!(tangents[1].p1, Point::new(20.0, -5.0));
/// ```
pub fn tangents_of_two_circles(c1: Circle, c2: Circle) -> TangentSet {
    let mut result = ArrayVec::new();
    let (r1, r2) = (c1.radius, c2.radius);
    let ab = c2.center - c1.center;
    let d_sq = ab.hypot2();
    if d_sq <= (r1 - r2) * (r1 - r2) {
        return result;
    }
    let d = d_sq.sqrt();
    let v = Vec2::new(ab.x / d, ab.y / d);

    for sign1 in [1.0, -1.0] {
        let c = (r1 - sign1 * r2) / d;
        if c * c > 1.0 {
            continue;
        }
        let h = (1.0 - c * c).max(0.0).sqrt();
        for sign2 in [1.0, -1.0] {
            let n = Vec2::new(v.x * c - sign2 * h * v.y, v.y * c + sign2 * h * v.x);
            result.push(Line::new(
                c1.center + r1 * n,
                c2.center + sign1 * r2 * n,
            ));
        }
    }
    result
}

/// Find the two tangent segments from a point to a circle.
///
/// Both lines start at `point` and end at their tangent point. With `b` the
/// angle of the vector from `point` to the center and `a = asin(r / dist)`,
/// the first tangent point sits at angle `b − a` and the second at `b + a`
/// around the point. In a y-down space, the first one is passed on the left
/// when walking from `point` towards the circle.
///
/// The point must lie outside of or on the circle. Strictly inside, there
/// is no tangent and every coordinate of the result is NaN. On the circle,
/// both tangent points are `point` itself.
///
/// # Examples
///
/// ```
/// use morphpath::{tangents_of_point_to_circle, Circle, Point};
///
/// let [upper, lower] = tangents_of_point_to_circle(
///     Point::new(-10.0, 0.0),
///     Circle::new((0.0, 0.0), 5.0),
/// );
/// assert!(upper.p1.y < 0.0 && lower.p1.y > 0.0);
/// assert!((upper.p1.x + 2.5).abs() < 1e-12);
/// ```
pub fn tangents_of_point_to_circle(point: Point, circle: Circle) -> [Line; 2] {
    let r = circle.radius;
    let delta = circle.center - point;
    let a = (r / delta.hypot()).asin();
    let b = delta.atan2();

    let (s1, c1) = (b - a).sin_cos();
    let (s2, c2) = (b + a).sin_cos();
    [
        Line::new(point, circle.center + Vec2::new(r * s1, -r * c1)),
        Line::new(point, circle.center + Vec2::new(-r * s2, r * c2)),
    ]
}
