// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Assembling an outline from a sequence of circles.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    bearing_degrees, sweep_degrees, tangents_of_point_to_circle, tangents_of_two_circles,
    CircleShape, PathSink, Point, ShapePath,
};

/// An error which can be returned when assembling a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
    /// Two consecutive circles lack the common tangent their directions call
    /// for: one contains the other, or they overlap while winding in
    /// opposite directions.
    NoCommonTangent {
        /// Position of the first of the two circles in the sequence.
        index: usize,
        /// Which of the (up to four) common tangents was needed.
        tangent: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NoCommonTangent { index, tangent } => write!(
                f,
                "circles {index} and {} have no common tangent #{tangent}",
                index + 1
            ),
        }
    }
}

impl core::error::Error for PathError {}

/// Assemble the outline running from `start` around each circle in turn to
/// `end`.
///
/// The outline is a line to `start`, then for every circle a line onto it and
/// an arc around it in its [`Direction`](crate::Direction), and finally a line
/// to `end`. With no circles it is just the two lines.
///
/// The line onto a circle is the tangent from the current point on the side
/// its direction asks for. The arc leaves along the common tangent towards
/// the next circle (exterior if both wind the same way, interior otherwise),
/// or along the tangent from `end` for the last circle.
///
/// `start` and `end` must lie outside every circle they connect to, and
/// circles must not contain their neighbours. A point inside a circle yields
/// NaN coordinates rather than an error.
///
/// # Errors
///
/// Returns [`PathError::NoCommonTangent`] when two consecutive circles have
/// no usable common tangent.
///
/// # Examples
///
/// ```
/// use morphpath::{assemble, CircleShape, Direction, PathSegment, Point};
///
/// let bump = CircleShape::new((50.0, 10.0), 20.0, Direction::Clockwise);
/// let path = assemble(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &[bump]).unwrap();
/// assert_eq!(path.len(), 4);
/// assert!(matches!(path.segments()[2], PathSegment::ArcTo(arc) if arc.sweep_angle > 0.0));
/// ```
pub fn assemble(start: Point, end: Point, circles: &[CircleShape]) -> Result<ShapePath, PathError> {
    let mut path = ShapePath::new();
    path.line_to(start);
    let mut cursor = start;

    for (i, shape) in circles.iter().enumerate() {
        let circle = shape.circle();
        let entry = tangents_of_point_to_circle(cursor, circle)[shape.direction.entry_index()].p1;
        path.line_to(entry);

        let exit = match circles.get(i + 1) {
            Some(next) => {
                let tangent = shape.direction.pair_index(next.direction);
                let line = tangents_of_two_circles(circle, next.circle())
                    .get(tangent)
                    .copied()
                    .ok_or(PathError::NoCommonTangent { index: i, tangent })?;
                cursor = line.p0;
                line.p0
            }
            None => tangents_of_point_to_circle(end, circle)[shape.direction.exit_index()].p1,
        };

        let start_angle = bearing_degrees(shape.center, entry);
        let end_angle = bearing_degrees(shape.center, exit);
        let sweep = sweep_degrees(start_angle, end_angle, shape.direction);
        path.add_arc(shape.bounding_box(), start_angle, sweep);
    }

    path.line_to(end);
    Ok(path)
}

/// Collects circles between a start and an end point, then assembles them.
///
/// This is a convenience over [`assemble`] for callers that add circles one
/// at a time. Insertion order is traversal order.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct PathBuilder {
    start: Point,
    end: Point,
    circles: Vec<CircleShape>,
}

impl PathBuilder {
    /// A builder for an outline from `start` to `end`, with no circles yet.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> PathBuilder {
        PathBuilder {
            start: start.into(),
            end: end.into(),
            circles: Vec::new(),
        }
    }

    /// Append a circle.
    pub fn push(&mut self, circle: CircleShape) {
        self.circles.push(circle);
    }

    /// Append a circle, builder style.
    #[must_use]
    pub fn with_circle(mut self, circle: CircleShape) -> PathBuilder {
        self.push(circle);
        self
    }

    /// Where the outline starts.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Where the outline ends.
    pub fn end(&self) -> Point {
        self.end
    }

    /// The circles, in traversal order.
    pub fn circles(&self) -> &[CircleShape] {
        &self.circles
    }

    /// Assemble the outline. See [`assemble`].
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NoCommonTangent`] when two consecutive circles
    /// have no usable common tangent.
    pub fn assemble(&self) -> Result<ShapePath, PathError> {
        assemble(self.start, self.end, &self.circles)
    }

    /// Assemble the outline and replay it into `sink`.
    ///
    /// Nothing reaches the sink when assembly fails.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NoCommonTangent`] when two consecutive circles
    /// have no usable common tangent.
    pub fn emit<S: PathSink + ?Sized>(&self, sink: &mut S) -> Result<(), PathError> {
        self.assemble()?.apply_to(sink);
        Ok(())
    }
}

impl Extend<CircleShape> for PathBuilder {
    fn extend<T: IntoIterator<Item = CircleShape>>(&mut self, iter: T) {
        self.circles.extend(iter);
    }
}
