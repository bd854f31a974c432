// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path commands, the sink trait that consumes them, and an owned path.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

use crate::{Point, Rect, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An arc of a circle, described the way path APIs take it: the square
/// around the circle plus a start angle and a signed sweep, both in degrees.
///
/// Angles follow [`bearing_degrees`](crate::bearing_degrees): 0° along
/// positive `x`, growing clockwise in a y-down space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleArc {
    /// The square circumscribing the circle.
    pub bounds: Rect,
    /// Where the arc starts, in degrees.
    pub start_angle: f64,
    /// How far the arc goes, in degrees; positive is clockwise.
    pub sweep_angle: f64,
}

impl CircleArc {
    /// Create a new arc.
    #[inline]
    pub fn new(bounds: Rect, start_angle: f64, sweep_angle: f64) -> CircleArc {
        CircleArc {
            bounds,
            start_angle,
            sweep_angle,
        }
    }

    /// The center of the arc's circle.
    #[inline]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// The radius of the arc's circle.
    #[inline]
    pub fn radius(&self) -> f64 {
        0.5 * self.bounds.width()
    }

    /// The point on the circle at `angle` degrees.
    #[inline]
    pub fn point_at(&self, angle: f64) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.center() + self.radius() * Vec2::new(cos, sin)
    }

    /// The point the arc starts at.
    #[inline]
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    /// The point the arc ends at.
    #[inline]
    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle)
    }
}

/// One drawing command of an assembled outline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSegment {
    /// A straight line from the current point.
    LineTo(Point),
    /// An arc; the host connects its current point to the arc start.
    ArcTo(CircleArc),
}

/// A consumer of outline commands, typically implemented by the rendering
/// layer on top of its own path type.
pub trait PathSink {
    /// Add a straight line from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Add an arc of the circle inscribed in `bounds`, starting at
    /// `start_angle` and sweeping by `sweep_angle` degrees.
    fn add_arc(&mut self, bounds: Rect, start_angle: f64, sweep_angle: f64);

    /// Add one segment.
    fn push_segment(&mut self, segment: PathSegment) {
        match segment {
            PathSegment::LineTo(p) => self.line_to(p),
            PathSegment::ArcTo(arc) => self.add_arc(arc.bounds, arc.start_angle, arc.sweep_angle),
        }
    }
}

impl PathSink for Vec<PathSegment> {
    fn line_to(&mut self, point: Point) {
        self.push(PathSegment::LineTo(point));
    }

    fn add_arc(&mut self, bounds: Rect, start_angle: f64, sweep_angle: f64) {
        self.push(PathSegment::ArcTo(CircleArc::new(
            bounds,
            start_angle,
            sweep_angle,
        )));
    }
}

/// An owned outline: the commands produced by one assembly.
///
/// A `ShapePath` is itself a [`PathSink`], so it can record; and it can
/// replay its commands into any other sink with [`apply_to`](Self::apply_to).
#[derive(Clone, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapePath(SmallVec<[PathSegment; 16]>);

impl ShapePath {
    /// Create a new, empty path.
    pub fn new() -> ShapePath {
        ShapePath::default()
    }

    /// Create a path from a vector of segments.
    pub fn from_vec(v: Vec<PathSegment>) -> ShapePath {
        ShapePath(SmallVec::from_vec(v))
    }

    /// Push a segment onto the path.
    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// The segments of the path.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Iterate over the segments.
    pub fn iter(&self) -> impl Iterator<Item = PathSegment> + '_ {
        self.0.iter().copied()
    }

    /// Iterate over the arcs only.
    pub fn arcs(&self) -> impl Iterator<Item = CircleArc> + '_ {
        self.iter().filter_map(|seg| match seg {
            PathSegment::ArcTo(arc) => Some(arc),
            PathSegment::LineTo(_) => None,
        })
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replay every segment, in order, into `sink`.
    pub fn apply_to<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for seg in self.iter() {
            sink.push_segment(seg);
        }
    }

    /// A rectangle enclosing every line end point and every arc's full
    /// circle, or `None` for an empty path.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.iter()
            .map(|seg| match seg {
                PathSegment::LineTo(p) => Rect::from_points(p, p),
                PathSegment::ArcTo(arc) => arc.bounds,
            })
            .reduce(|acc, r| acc.union(r))
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// The first line becomes a move. Each arc is preceded by a line to its
    /// start point, and arcs of more than 180° are split in two so the
    /// large-arc flag is never needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphpath::{assemble, Point};
    ///
    /// let path = assemble(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[]).unwrap();
    /// assert_eq!(path.to_svg(), "M0 0 L10 0");
    /// ```
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        // Writing into a String never fails.
        let _ = self.write_svg(&mut result);
        result
    }

    /// Write the SVG path representation into `w`.
    ///
    /// See [`to_svg`](Self::to_svg).
    ///
    /// # Errors
    ///
    /// Returns any error from `w`.
    pub fn write_svg<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let mut started = false;
        for seg in self.iter() {
            let sep = if started { " " } else { "" };
            match seg {
                PathSegment::LineTo(p) => {
                    let cmd = if started { 'L' } else { 'M' };
                    write!(w, "{sep}{cmd}{} {}", p.x, p.y)?;
                }
                PathSegment::ArcTo(arc) => {
                    let start = arc.start_point();
                    let cmd = if started { 'L' } else { 'M' };
                    write!(w, "{sep}{cmd}{} {}", start.x, start.y)?;
                    let r = arc.radius();
                    let sweep_flag = u8::from(arc.sweep_angle > 0.0);
                    let pieces = if arc.sweep_angle.abs() > 180.0 { 2 } else { 1 };
                    let step = arc.sweep_angle / f64::from(pieces);
                    for i in 1..=pieces {
                        let p = arc.point_at(arc.start_angle + step * f64::from(i));
                        write!(w, " A{r} {r} 0 0 {sweep_flag} {} {}", p.x, p.y)?;
                    }
                }
            }
            started = true;
        }
        Ok(())
    }
}

impl PathSink for ShapePath {
    fn line_to(&mut self, point: Point) {
        self.push(PathSegment::LineTo(point));
    }

    fn add_arc(&mut self, bounds: Rect, start_angle: f64, sweep_angle: f64) {
        self.push(PathSegment::ArcTo(CircleArc::new(
            bounds,
            start_angle,
            sweep_angle,
        )));
    }
}

impl FromIterator<PathSegment> for ShapePath {
    fn from_iter<T: IntoIterator<Item = PathSegment>>(iter: T) -> Self {
        ShapePath(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShapePath {
    type Item = PathSegment;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, PathSegment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments().iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{CircleArc, PathSegment, PathSink, Point, Rect, ShapePath};

    fn assert_near(p: Point, q: Point) {
        assert!(p.distance(q) < 1e-9, "{p:?} != {q:?}");
    }

    fn unit_arc(start: f64, sweep: f64) -> CircleArc {
        CircleArc::new(Rect::new(-1.0, -1.0, 1.0, 1.0), start, sweep)
    }

    #[test]
    fn arc_end_points() {
        let arc = CircleArc::new(Rect::new(15.0, -5.0, 25.0, 5.0), -90.0, 30.0);
        assert_eq!(arc.center(), Point::new(20.0, 0.0));
        assert_eq!(arc.radius(), 5.0);
        assert_near(arc.start_point(), Point::new(20.0, -5.0));
        assert_near(arc.end_point(), Point::new(22.5, -(0.75_f64.sqrt()) * 5.0));
    }

    #[test]
    fn record_and_replay() {
        let mut path = ShapePath::new();
        path.line_to(Point::new(1.0, 2.0));
        path.add_arc(Rect::new(-1.0, -1.0, 1.0, 1.0), 0.0, 90.0);
        assert_eq!(path.len(), 2);

        let mut replay: Vec<PathSegment> = Vec::new();
        path.apply_to(&mut replay);
        assert_eq!(replay.as_slice(), path.segments());
        assert_eq!(ShapePath::from_vec(replay), path);
        assert_eq!(path.arcs().count(), 1);
    }

    #[test]
    fn bounding_box() {
        assert_eq!(ShapePath::new().bounding_box(), None);
        let path: ShapePath = [
            PathSegment::LineTo(Point::new(-3.0, 0.5)),
            PathSegment::ArcTo(unit_arc(0.0, 45.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.bounding_box(), Some(Rect::new(-3.0, -1.0, 1.0, 1.0)));
    }

    #[test]
    fn svg_lines() {
        let path: ShapePath = [
            PathSegment::LineTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(10.5, -2.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_svg(), "M0 0 L10.5 -2");
    }

    #[test]
    fn svg_splits_long_arcs() {
        let short: ShapePath = core::iter::once(PathSegment::ArcTo(unit_arc(0.0, 90.0))).collect();
        let svg = short.to_svg();
        assert!(svg.starts_with("M1 0 A1 1 0 0 1 "), "{svg}");
        assert_eq!(svg.matches('A').count(), 1);

        let long: ShapePath = [
            PathSegment::LineTo(Point::new(2.0, 0.0)),
            PathSegment::ArcTo(unit_arc(0.0, -270.0)),
        ]
        .into_iter()
        .collect();
        let svg = long.to_svg();
        assert!(svg.starts_with("M2 0 L1 0 A1 1 0 0 0 "), "{svg}");
        assert_eq!(svg.matches('A').count(), 2);
    }
}
