// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use kurbo::{Point, Rect, Vec2};

use crate::point::Translate;
use crate::segment::Segment;

/// Axis-aligned bounding box in 2D.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. [`Aabb::new`] accepts any two
/// opposite corners and normalizes them. Edges are inclusive, so boxes that only
/// touch still overlap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    min: Point,
    max: Point,
}

impl Aabb {
    /// The zero-size box at the origin.
    pub const ZERO: Self = Self {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Create a box from two opposite corners, in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a box from origin and size. Negative sizes are normalized.
    pub fn from_origin_size(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin, origin + Vec2::new(width, height))
    }

    /// The smallest box containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::new(first, first), |acc, p| {
            acc.union(&Self::new(p, p))
        }))
    }

    /// Minimum corner (smallest x and y).
    pub fn min(&self) -> Point {
        self.min
    }

    /// Maximum corner (largest x and y).
    pub fn max(&self) -> Point {
        self.max
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point.
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// True when the box has no area.
    pub fn is_zero_area(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// The four corners, in loop order starting at `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// The four edges as segments, built from [`Aabb::corners`].
    pub fn edges(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.corners();
        [
            Segment::new(a, b),
            Segment::new(b, c),
            Segment::new(c, d),
            Segment::new(d, a),
        ]
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Like [`Aabb::contains`], with the box grown by `eps` on every side.
    pub fn contains_within(&self, p: Point, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    /// Separating-axis test. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.min.x > other.max.x
            || self.max.x < other.min.x
            || self.min.y > other.max.y
            || self.max.y < other.min.y)
    }

    /// The smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Convert to a Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.min, self.max)
    }
}

impl From<Rect> for Aabb {
    fn from(r: Rect) -> Self {
        Self::new(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1))
    }
}

impl From<Aabb> for Rect {
    fn from(b: Aabb) -> Self {
        b.to_rect()
    }
}

impl Translate for Aabb {
    fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }
}
