// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points and the translation primitive shared by every shape.
//!
//! Points are [`kurbo::Point`] values. Equality is exact (no tolerance), which is
//! what the point–point predicate uses.

use kurbo::{Point, Vec2};

/// Move a value by a displacement.
///
/// This is the only mutation the kernel exposes for geometry. Implementations
/// keep any cached data (bounds, line intercepts) in sync with the new position.
pub trait Translate {
    /// Move `self` by `delta`.
    fn translate(&mut self, delta: Vec2);

    /// Return a copy of `self` moved by `delta`.
    fn translated(mut self, delta: Vec2) -> Self
    where
        Self: Sized,
    {
        self.translate(delta);
        self
    }
}

impl Translate for Point {
    fn translate(&mut self, delta: Vec2) {
        *self += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_both_coordinates() {
        let mut p = Point::new(2.0, 3.0);
        p.translate(Vec2::new(1.5, -4.0));
        assert_eq!(p, Point::new(3.5, -1.0));
        assert_eq!(
            Point::ZERO.translated(Vec2::new(-1.0, 1.0)),
            Point::new(-1.0, 1.0)
        );
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(2.0, 3.0), Point::new(2.0, 3.0));
        assert_ne!(Point::new(2.0, 3.0), Point::new(2.0, 3.000_000_1));
    }
}
