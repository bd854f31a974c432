// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Winding direction of an arc, and the tangent choices it drives.

/// The direction an outline winds around a circle.
///
/// Directions are given in a y-down space: `Clockwise` sweeps towards
/// increasing angles as reported by [`bearing_degrees`](crate::bearing_degrees).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Positive sweep, clockwise on screen.
    #[default]
    Clockwise,
    /// Negative sweep.
    CounterClockwise,
}

/// Which common tangent of two circles joins an arc on the first to an arc on
/// the second, indexed by `[current][next]` with `Clockwise = 0`.
///
/// Values index into [`tangents_of_two_circles`](crate::tangents_of_two_circles):
/// same direction uses an exterior tangent, opposite directions an interior
/// one.
const PAIR_TANGENT: [[usize; 2]; 2] = [
    // Clockwise -> Clockwise, Clockwise -> CounterClockwise
    [1, 3],
    // CounterClockwise -> Clockwise, CounterClockwise -> CounterClockwise
    [2, 0],
];

impl Direction {
    /// The opposite direction.
    #[inline]
    #[must_use]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Whether this is [`Direction::Clockwise`].
    #[inline]
    pub fn is_clockwise(self) -> bool {
        self == Direction::Clockwise
    }

    /// Index of the point-to-circle tangent used to approach a circle
    /// winding this way.
    #[inline]
    pub fn entry_index(self) -> usize {
        match self {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        }
    }

    /// Index of the point-to-circle tangent used to leave a circle winding
    /// this way towards a fixed end point.
    ///
    /// The tangent is computed from the end point, so this is the mirror of
    /// [`entry_index`](Self::entry_index).
    #[inline]
    pub fn exit_index(self) -> usize {
        self.reversed().entry_index()
    }

    /// Index of the common tangent leading from a circle winding `self` to
    /// the next circle winding `next`.
    #[inline]
    pub fn pair_index(self, next: Direction) -> usize {
        PAIR_TANGENT[self.row()][next.row()]
    }

    #[inline]
    fn row(self) -> usize {
        match self {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction::{Clockwise, CounterClockwise};

    #[test]
    fn pair_table() {
        assert_eq!(CounterClockwise.pair_index(CounterClockwise), 0);
        assert_eq!(Clockwise.pair_index(Clockwise), 1);
        assert_eq!(CounterClockwise.pair_index(Clockwise), 2);
        assert_eq!(Clockwise.pair_index(CounterClockwise), 3);
    }

    #[test]
    fn entry_and_exit_mirror() {
        assert_eq!(Clockwise.entry_index(), 0);
        assert_eq!(Clockwise.exit_index(), 1);
        assert_eq!(CounterClockwise.entry_index(), 1);
        assert_eq!(CounterClockwise.exit_index(), 0);
        assert_eq!(Clockwise.reversed().reversed(), Clockwise);
    }
}
