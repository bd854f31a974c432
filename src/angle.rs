// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bearings and sweeps in degrees.

use crate::{Direction, Point};

/// The angle from `center` to `point`, in degrees.
///
/// 0° points along positive `x` and angles grow clockwise in a y-down space.
/// The range is `(-180, 180]`: the result is neither rotated nor wrapped
/// into `[0, 360)`, and [`sweep_degrees`] relies on that.
///
/// # Examples
///
/// ```
/// use morphpath::{bearing_degrees, Point};
///
/// let c = Point::new(0.0, 0.0);
/// assert_eq!(bearing_degrees(c, Point::new(1.0, 0.0)), 0.0);
/// assert!((bearing_degrees(c, Point::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
/// assert!((bearing_degrees(c, Point::new(0.0, -1.0)) + 90.0).abs() < 1e-12);
/// ```
#[inline]
pub fn bearing_degrees(center: Point, point: Point) -> f64 {
    (point - center).atan2().to_degrees()
}

/// The signed sweep from `start` to `end` (both in degrees) going around in
/// `direction`.
///
/// Clockwise sweeps are never negative and counter-clockwise ones never
/// positive; the raw difference is moved by a full turn when its sign
/// disagrees with the direction.
#[inline]
pub fn sweep_degrees(start: f64, end: f64, direction: Direction) -> f64 {
    let sweep = end - start;
    match direction {
        Direction::Clockwise if sweep < 0.0 => sweep + 360.0,
        Direction::CounterClockwise if sweep > 0.0 => sweep - 360.0,
        _ => sweep,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{bearing_degrees, sweep_degrees, Direction, Point};

    #[test]
    fn bearing_quadrants() {
        let c = Point::new(10.0, 10.0);
        assert_eq!(bearing_degrees(c, Point::new(20.0, 10.0)), 0.0);
        assert!((bearing_degrees(c, Point::new(0.0, 10.0)) - 180.0).abs() < 1e-12);
        assert!((bearing_degrees(c, Point::new(20.0, 20.0)) - 45.0).abs() < 1e-12);
        assert!((bearing_degrees(c, Point::new(0.0, 0.0)) + 135.0).abs() < 1e-12);
    }

    #[test]
    fn sweep_follows_direction() {
        assert_eq!(sweep_degrees(-120.0, -90.0, Direction::Clockwise), 30.0);
        assert_eq!(sweep_degrees(-90.0, -120.0, Direction::Clockwise), 330.0);
        assert_eq!(sweep_degrees(-90.0, -120.0, Direction::CounterClockwise), -30.0);
        assert_eq!(sweep_degrees(170.0, -170.0, Direction::CounterClockwise), -340.0);
        assert_eq!(sweep_degrees(170.0, -170.0, Direction::Clockwise), 20.0);
        assert_eq!(sweep_degrees(45.0, 45.0, Direction::CounterClockwise), 0.0);
    }

    #[test]
    fn sweep_sign_matches_direction() {
        let mut rng = StdRng::seed_from_u64(3);
        let center = Point::new(1.0, -2.0);
        for _ in 0..1000 {
            let on_circle = |rng: &mut StdRng| {
                let th: f64 = rng.random_range(-3.2..3.2);
                Point::new(center.x + 7.0 * th.cos(), center.y + 7.0 * th.sin())
            };
            let start = bearing_degrees(center, on_circle(&mut rng));
            let end = bearing_degrees(center, on_circle(&mut rng));
            if (end - start).abs() < 1e-9 {
                continue;
            }
            let cw = sweep_degrees(start, end, Direction::Clockwise);
            let ccw = sweep_degrees(start, end, Direction::CounterClockwise);
            assert!(cw > 0.0 && cw < 360.0, "{start} {end} {cw}");
            assert!(ccw < 0.0 && ccw > -360.0, "{start} {end} {ccw}");
            assert!((cw - ccw - 360.0).abs() < 1e-9);
        }
    }
}
