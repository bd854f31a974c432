// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The morphing edge of a bottom navigation bar.
//!
//! The selected item pushes a circular bump up out of the bar's top edge,
//! with two corner circles rounding the joints to the flat baseline. While
//! the selection animates, the previously selected item's bump sinks back in
//! as the new one rises.

use alloc::vec::Vec;
use core::fmt;

use crate::{assemble, CircleShape, Direction, PathError, Point, ShapePath, Side};

/// Default radius of the bump circle, in density-independent pixels.
pub const DEFAULT_ITEM_RADIUS: f64 = 64.0;
/// Default radius of the corner circles, in density-independent pixels.
pub const DEFAULT_CORNER_RADIUS: f64 = 128.0;
/// Default height of the bump and of the baseline, in density-independent
/// pixels.
pub const DEFAULT_VERTICAL_OFFSET: f64 = 8.0;

/// Configuration and selection state of a morphing bar edge.
///
/// The edge runs along `y = vertical_offset`, from `x = 0` to the bar's
/// length. Each item that is selected or was selected last gets three
/// circles: a clockwise bump circle of `item_radius` centered on the item,
/// lifted by up to `vertical_offset`, and two counter-clockwise corner circles
/// of `corner_radius` resting on the baseline on either side of it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphEdge {
    /// Number of items in the bar.
    pub item_count: usize,
    /// Radius of the bump circle.
    #[cfg_attr(feature = "serde", serde(default = "default_item_radius"))]
    pub item_radius: f64,
    /// Radius of the two corner circles.
    #[cfg_attr(feature = "serde", serde(default = "default_corner_radius"))]
    pub corner_radius: f64,
    /// Baseline of the edge, which is also how far a fully raised bump
    /// rises above it.
    #[cfg_attr(feature = "serde", serde(default = "default_vertical_offset"))]
    pub vertical_offset: f64,
    /// The item being selected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected: usize,
    /// The item selected before `selected`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_selected: usize,
}

#[cfg(feature = "serde")]
fn default_item_radius() -> f64 {
    DEFAULT_ITEM_RADIUS
}

#[cfg(feature = "serde")]
fn default_corner_radius() -> f64 {
    DEFAULT_CORNER_RADIUS
}

#[cfg(feature = "serde")]
fn default_vertical_offset() -> f64 {
    DEFAULT_VERTICAL_OFFSET
}

/// An error which can be returned when building a morphing edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphError {
    /// The bar has no items.
    NoItems,
    /// An item index is not below the item count.
    ItemOutOfRange {
        /// The offending index.
        item: usize,
        /// The number of items.
        item_count: usize,
    },
    /// A radius is not a positive finite number.
    InvalidRadius(f64),
    /// The vertical offset is negative, not finite, or too large for the
    /// corner circles to reach the bump.
    InvalidOffset(f64),
    /// The interpolation is outside of `[0, 1]`.
    InvalidInterpolation(f64),
    /// The bar length is not a positive finite number.
    InvalidLength(f64),
    /// The number of item centers differs from the item count.
    CenterCountMismatch {
        /// The configured item count.
        expected: usize,
        /// How many centers were given.
        found: usize,
    },
    /// The circles could not be joined into a path.
    Path(PathError),
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::NoItems => write!(f, "The bar has no items"),
            MorphError::ItemOutOfRange { item, item_count } => {
                write!(f, "Item {item} is out of range for {item_count} items")
            }
            MorphError::InvalidRadius(r) => write!(f, "Invalid radius {r}"),
            MorphError::InvalidOffset(o) => write!(f, "Invalid vertical offset {o}"),
            MorphError::InvalidInterpolation(t) => {
                write!(f, "Interpolation {t} is outside of [0, 1]")
            }
            MorphError::InvalidLength(l) => write!(f, "Invalid bar length {l}"),
            MorphError::CenterCountMismatch { expected, found } => {
                write!(f, "Expected {expected} item centers, got {found}")
            }
            MorphError::Path(e) => write!(f, "Unable to assemble the edge: {e}"),
        }
    }
}

impl core::error::Error for MorphError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            MorphError::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for MorphError {
    fn from(e: PathError) -> Self {
        MorphError::Path(e)
    }
}

impl MorphEdge {
    /// A new edge with the given geometry and the first item selected.
    pub fn new(
        item_count: usize,
        item_radius: f64,
        corner_radius: f64,
        vertical_offset: f64,
    ) -> MorphEdge {
        MorphEdge {
            item_count,
            item_radius,
            corner_radius,
            vertical_offset,
            selected: 0,
            last_selected: 0,
        }
    }

    /// A new edge with the default radii and offset.
    pub fn with_item_count(item_count: usize) -> MorphEdge {
        MorphEdge::new(
            item_count,
            DEFAULT_ITEM_RADIUS,
            DEFAULT_CORNER_RADIUS,
            DEFAULT_VERTICAL_OFFSET,
        )
    }

    /// Select `item`, remembering the current selection as the last one.
    ///
    /// Selecting the current item again changes nothing.
    pub fn select(&mut self, item: usize) {
        if item != self.selected {
            self.last_selected = self.selected;
            self.selected = item;
        }
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: no items, a selection out of range,
    /// a radius that isn't positive, or an offset that is negative or so
    /// large that the corner circles can't touch a raised bump.
    pub fn validate(&self) -> Result<(), MorphError> {
        if self.item_count == 0 {
            return Err(MorphError::NoItems);
        }
        for item in [self.selected, self.last_selected] {
            if item >= self.item_count {
                return Err(MorphError::ItemOutOfRange {
                    item,
                    item_count: self.item_count,
                });
            }
        }
        for r in [self.item_radius, self.corner_radius] {
            if !(r.is_finite() && r > 0.0) {
                return Err(MorphError::InvalidRadius(r));
            }
        }
        let offset = self.vertical_offset;
        let max_offset = 2.0 * (self.item_radius + self.corner_radius);
        if !(offset.is_finite() && offset >= 0.0 && offset <= max_offset) {
            return Err(MorphError::InvalidOffset(offset));
        }
        Ok(())
    }

    /// How far the bump of `item` is raised at `interpolation`.
    ///
    /// The selected item rises from nothing to `vertical_offset` as the
    /// interpolation goes from 0 to 1; the last selected item sinks back.
    /// Other items stay flat.
    pub fn lift(&self, item: usize, interpolation: f64) -> f64 {
        if item == self.selected {
            interpolation * self.vertical_offset
        } else if item == self.last_selected {
            (1.0 - interpolation) * self.vertical_offset
        } else {
            0.0
        }
    }

    /// The circles of a bar `length` long with evenly spaced items.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid (see
    /// [`validate`](Self::validate)), or when `length` or `interpolation` are
    /// out of range.
    pub fn circles(
        &self,
        length: f64,
        interpolation: f64,
    ) -> Result<Vec<CircleShape>, MorphError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(MorphError::InvalidLength(length));
        }
        let item_width = length / self.item_count as f64;
        let centers: Vec<Option<f64>> = (0..self.item_count)
            .map(|i| Some(item_width * i as f64 + item_width / 2.0))
            .collect();
        self.circles_at(&centers, interpolation)
    }

    /// The circles for items laid out by the host.
    ///
    /// `centers` holds the horizontal center of every item, or `None` for an
    /// item that isn't shown. Items are visited in order, so centers should
    /// increase. Only raised items get circles: the last selected item drops
    /// out once the interpolation reaches 1, as does the selected one at 0.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid (see
    /// [`validate`](Self::validate)), when `interpolation` is outside of
    /// `[0, 1]`, or when `centers` doesn't have one entry per item.
    pub fn circles_at(
        &self,
        centers: &[Option<f64>],
        interpolation: f64,
    ) -> Result<Vec<CircleShape>, MorphError> {
        self.validate()?;
        if !(0.0..=1.0).contains(&interpolation) {
            return Err(MorphError::InvalidInterpolation(interpolation));
        }
        if centers.len() != self.item_count {
            return Err(MorphError::CenterCountMismatch {
                expected: self.item_count,
                found: centers.len(),
            });
        }

        let mut circles = Vec::new();
        for (item, center) in centers.iter().enumerate() {
            let Some(cx) = *center else {
                continue;
            };
            // A flat item leaves the edge straight, and its corner circles
            // would only share the baseline as a tangent.
            let lift = self.lift(item, interpolation);
            if lift > 0.0 {
                circles.extend(self.item_circles(cx, lift));
            }
        }
        Ok(circles)
    }

    /// The edge path of a bar `length` long with evenly spaced items.
    ///
    /// # Errors
    ///
    /// See [`circles`](Self::circles); also fails when the circles can't be
    /// joined, for instance when two raised items are so close that their
    /// corner circles nest.
    pub fn edge_path(&self, length: f64, interpolation: f64) -> Result<ShapePath, MorphError> {
        let circles = self.circles(length, interpolation)?;
        self.assemble_edge(length, &circles)
    }

    /// The edge path for items laid out by the host.
    ///
    /// # Errors
    ///
    /// See [`circles_at`](Self::circles_at) and [`edge_path`](Self::edge_path).
    pub fn edge_path_at(
        &self,
        length: f64,
        centers: &[Option<f64>],
        interpolation: f64,
    ) -> Result<ShapePath, MorphError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(MorphError::InvalidLength(length));
        }
        let circles = self.circles_at(centers, interpolation)?;
        self.assemble_edge(length, &circles)
    }

    fn assemble_edge(
        &self,
        length: f64,
        circles: &[CircleShape],
    ) -> Result<ShapePath, MorphError> {
        let start = Point::new(0.0, self.vertical_offset);
        let end = Point::new(length, self.vertical_offset);
        Ok(assemble(start, end, circles)?)
    }

    /// Left corner, bump, right corner.
    fn item_circles(&self, cx: f64, lift: f64) -> [CircleShape; 3] {
        let bump = CircleShape::new(
            (cx, self.vertical_offset + self.item_radius - lift),
            self.item_radius,
            Direction::Clockwise,
        );
        let corner = CircleShape::new(
            (cx, self.vertical_offset - self.corner_radius),
            self.corner_radius,
            Direction::CounterClockwise,
        );
        [
            bump.shift_outside(corner, Side::Left),
            bump,
            bump.shift_outside(corner, Side::Right),
        ]
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{
        CircleShape, Direction, MorphEdge, MorphError, PathError, PathSegment, Point, SHIFT_MARGIN,
    };

    fn edge() -> MorphEdge {
        MorphEdge::new(4, 24.0, 8.0, 16.0)
    }

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn validation() {
        assert_eq!(MorphEdge::new(0, 1.0, 1.0, 1.0).validate(), Err(MorphError::NoItems));
        let mut e = edge();
        e.selected = 4;
        assert_eq!(
            e.validate(),
            Err(MorphError::ItemOutOfRange { item: 4, item_count: 4 })
        );
        let mut e = edge();
        e.corner_radius = 0.0;
        assert_eq!(e.validate(), Err(MorphError::InvalidRadius(0.0)));
        let mut e = edge();
        e.vertical_offset = 100.0;
        assert_eq!(e.validate(), Err(MorphError::InvalidOffset(100.0)));
        assert!(edge().validate().is_ok());
        assert!(MorphEdge::with_item_count(5).validate().is_ok());

        assert_eq!(edge().circles(-1.0, 0.5), Err(MorphError::InvalidLength(-1.0)));
        assert_eq!(edge().circles(100.0, 1.5), Err(MorphError::InvalidInterpolation(1.5)));
        assert!(matches!(
            edge().circles(100.0, f64::NAN),
            Err(MorphError::InvalidInterpolation(_))
        ));
        assert_eq!(
            edge().circles_at(&[Some(1.0)], 0.5),
            Err(MorphError::CenterCountMismatch { expected: 4, found: 1 })
        );
    }

    #[test]
    fn select_tracks_last() {
        let mut e = edge();
        e.select(2);
        assert_eq!((e.selected, e.last_selected), (2, 0));
        e.select(2);
        assert_eq!((e.selected, e.last_selected), (2, 0));
        e.select(3);
        assert_eq!((e.selected, e.last_selected), (3, 2));
    }

    #[test]
    fn lift_animates_both_items() {
        let mut e = edge();
        e.select(1);
        assert_eq!(e.lift(1, 0.25), 4.0);
        assert_eq!(e.lift(0, 0.25), 12.0);
        assert_eq!(e.lift(3, 0.25), 0.0);
    }

    #[test]
    fn circles_of_a_single_selection() {
        let circles = edge().circles(400.0, 1.0).unwrap();
        assert_eq!(circles.len(), 3);
        let [left, bump, right]: [CircleShape; 3] = circles.try_into().unwrap();

        // Fully raised: the top of the bump is at y = 0.
        assert_eq!(bump.center, Point::new(50.0, 24.0));
        assert_eq!(bump.direction, Direction::Clockwise);
        for corner in [left, right] {
            assert_eq!(corner.radius, 8.0);
            assert_eq!(corner.center.y, 8.0);
            assert_eq!(corner.direction, Direction::CounterClockwise);
            let gap = corner.center.distance(bump.center) - 32.0;
            assert!(gap > 0.0 && gap <= SHIFT_MARGIN, "{gap}");
        }
        assert!(left.center.x < bump.center.x && bump.center.x < right.center.x);
        assert_approx_eq(bump.center.x - left.center.x, right.center.x - bump.center.x);
    }

    #[test]
    fn circles_of_an_animated_selection() {
        let mut e = edge();
        e.select(2);
        let circles = e.circles(400.0, 0.5).unwrap();
        assert_eq!(circles.len(), 6);
        let xs: Vec<f64> = circles.iter().map(|c| c.center.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "{xs:?}");
        // Both bumps are half way.
        assert_eq!(circles[1].center.y, 32.0);
        assert_eq!(circles[4].center.y, 32.0);
        assert_eq!(circles[4].center.x, 250.0);
    }

    #[test]
    fn hidden_items_are_skipped() {
        let mut e = edge();
        e.select(1);
        let circles = e
            .circles_at(&[Some(40.0), None, Some(200.0), Some(300.0)], 0.3)
            .unwrap();
        assert_eq!(circles.len(), 3);
        assert_eq!(circles[1].center.x, 40.0);
    }

    #[test]
    fn edge_path_runs_along_the_baseline() {
        let mut e = edge();
        e.select(3);
        for step in 0..=10 {
            let t = f64::from(step) / 10.0;
            let circles = e.circles(400.0, t).unwrap();
            let expected = if step == 0 || step == 10 { 3 } else { 6 };
            assert_eq!(circles.len(), expected, "t = {t}");
            let path = e.edge_path(400.0, t).unwrap();
            let segs = path.segments();
            assert_eq!(segs.len(), 2 * circles.len() + 2);
            assert_eq!(segs[0], PathSegment::LineTo(Point::new(0.0, 16.0)));
            assert_eq!(segs[segs.len() - 1], PathSegment::LineTo(Point::new(400.0, 16.0)));
            for seg in path.iter() {
                match seg {
                    PathSegment::LineTo(p) => assert!(p.is_finite(), "t = {t}"),
                    PathSegment::ArcTo(arc) => {
                        assert!(arc.start_angle.is_finite() && arc.sweep_angle.is_finite());
                        assert!(arc.sweep_angle.abs() < 360.0);
                    }
                }
            }
            assert!(path.to_svg().starts_with("M0 16 L"));
        }
    }

    #[test]
    fn resting_edge_is_flat() {
        let mut e = edge();
        e.selected = 1;
        e.last_selected = 1;
        let path = e.edge_path(400.0, 0.0).unwrap();
        assert_eq!(path.to_svg(), "M0 16 L400 16");
    }

    #[test]
    fn path_errors_are_wrapped() {
        let err = MorphError::from(PathError::NoCommonTangent { index: 1, tangent: 3 });
        assert_eq!(err, MorphError::Path(PathError::NoCommonTangent { index: 1, tangent: 3 }));
        assert!(core::error::Error::source(&err).is_some());
        assert_eq!(
            alloc::format!("{err}"),
            "Unable to assemble the edge: circles 1 and 2 have no common tangent #3"
        );
        assert!(core::error::Error::source(&MorphError::NoItems).is_none());
    }
}
