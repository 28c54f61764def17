//! Axis and pointer-position tracking.
//!
//! A [`Coordinate`] remembers the current, previous, and initial (anchor) sample for a
//! single axis and derives the signed distance and scroll direction from the anchor.
//! [`Coordinates`] pairs two of them into a 2-D tracker. The same shape serves two roles:
//! the engine keeps one pair for the raw pointer *position* (pixel offsets) and one for
//! the derived *direction* (each axis clamped to -1/0/+1).

use serde::Serialize;

/// Single-axis sample history relative to an anchor point.
///
/// Invariant: `previous` always holds the value `current` had immediately before the
/// last [`set`](Coordinate::set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub current: i32,
    pub previous: i32,
    pub initial: i32,
}

impl Coordinate {
    /// Record a new sample, shifting the old current value into `previous`.
    pub fn set(&mut self, value: i32) {
        self.previous = self.current;
        self.current = value;
    }

    /// Re-anchor the axis at `value`: current, previous, and initial all collapse to it.
    pub fn anchor(&mut self, value: i32) {
        self.current = value;
        self.previous = value;
        self.initial = value;
    }

    /// Signed distance from the anchor (`initial - current`).
    pub fn distance(&self) -> i32 {
        self.initial - self.current
    }

    /// Absolute distance from the anchor.
    pub fn distance_abs(&self) -> i32 {
        self.distance().abs()
    }

    /// Scroll direction for this axis: the sign of [`distance`](Coordinate::distance),
    /// so -1, 0, or +1, with 0 exactly when the sample sits on the anchor.
    pub fn direction(&self) -> i32 {
        self.distance().signum()
    }
}

/// A 2-D tracker pairing an x and y [`Coordinate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Coordinates {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Coordinates {
    /// Record a new 2-D sample for both axes.
    pub fn set(&mut self, x: i32, y: i32) {
        self.x.set(x);
        self.y.set(y);
    }

    /// Re-anchor both axes at `(x, y)`.
    pub fn anchor(&mut self, x: i32, y: i32) {
        self.x.anchor(x);
        self.y.anchor(y);
    }

    /// Reset both axes to the neutral origin.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current sample as `(x, y)`.
    pub fn current(&self) -> (i32, i32) {
        (self.x.current, self.y.current)
    }

    /// Anchor point as `(x, y)`.
    pub fn initial(&self) -> (i32, i32) {
        (self.x.initial, self.y.initial)
    }

    /// Per-axis direction, each component in {-1, 0, +1}.
    pub fn direction(&self) -> (i32, i32) {
        (self.x.direction(), self.y.direction())
    }

    /// Per-axis distance from the anchor, signed or absolute.
    pub fn distance(&self, absolute: bool) -> (i32, i32) {
        if absolute {
            (self.x.distance_abs(), self.y.distance_abs())
        } else {
            (self.x.distance(), self.y.distance())
        }
    }

    /// Largest absolute axis distance from the anchor.
    pub fn max_distance(&self) -> i32 {
        self.x.distance_abs().max(self.y.distance_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_shifts_current_into_previous() {
        let mut axis = Coordinate::default();
        axis.set(10);
        axis.set(25);

        assert_eq!(axis.current, 25);
        assert_eq!(axis.previous, 10);
        assert_eq!(axis.initial, 0);
    }

    #[test]
    fn anchor_collapses_all_samples() {
        let mut axis = Coordinate::default();
        axis.set(40);
        axis.anchor(100);

        assert_eq!(axis.current, 100);
        assert_eq!(axis.previous, 100);
        assert_eq!(axis.initial, 100);
        assert_eq!(axis.distance(), 0);
        assert_eq!(axis.direction(), 0);
    }

    #[test]
    fn direction_follows_sign_of_distance() {
        let mut axis = Coordinate::default();
        axis.anchor(100);

        axis.set(150);
        assert_eq!(axis.distance(), -50);
        assert_eq!(axis.direction(), -1);

        axis.set(60);
        assert_eq!(axis.distance(), 40);
        assert_eq!(axis.direction(), 1);

        axis.set(100);
        assert_eq!(axis.direction(), 0);
    }

    #[test]
    fn pair_tracks_both_axes() {
        let mut coords = Coordinates::default();
        coords.anchor(100, 100);
        coords.set(120, 80);

        assert_eq!(coords.current(), (120, 80));
        assert_eq!(coords.initial(), (100, 100));
        assert_eq!(coords.direction(), (-1, 1));
        assert_eq!(coords.distance(false), (-20, 20));
        assert_eq!(coords.distance(true), (20, 20));
        assert_eq!(coords.max_distance(), 20);
    }

    #[test]
    fn reset_returns_to_neutral() {
        let mut coords = Coordinates::default();
        coords.anchor(5, 7);
        coords.set(30, 40);
        coords.reset();

        assert_eq!(coords, Coordinates::default());
        assert_eq!(coords.direction(), (0, 0));
    }

    proptest! {
        #[test]
        fn previous_always_holds_prior_current(samples in prop::collection::vec(-100_000i32..100_000, 1..50)) {
            let mut axis = Coordinate::default();
            let mut last = axis.current;
            for value in samples {
                axis.set(value);
                prop_assert_eq!(axis.previous, last);
                prop_assert_eq!(axis.current, value);
                last = value;
            }
        }

        #[test]
        fn direction_is_sign_of_distance(anchor in -100_000i32..100_000, sample in -100_000i32..100_000) {
            let mut axis = Coordinate::default();
            axis.anchor(anchor);
            axis.set(sample);
            let direction = axis.direction();
            prop_assert!((-1..=1).contains(&direction));
            prop_assert_eq!(direction, (anchor - sample).signum());
        }
    }
}
