// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tangent queries: how far to move a point along an axis to reach a shape's boundary.
//!
//! The y axis grows upward. [`Direction::Up`] targets the largest y of the shape
//! above or below the query point, [`Direction::Down`] the smallest y,
//! [`Direction::Left`] the smallest x and [`Direction::Right`] the largest x.
//! Collision response uses the resulting offset to push an entity out of (or onto)
//! another one.

use kurbo::{Point, Vec2};

use crate::aabb::Aabb;
use crate::polygon::Polygon;
use crate::segment::Segment;
use crate::shape::Shape;
use crate::util::clamp;

/// An axis direction for tangent queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward larger y.
    Up,
    /// Toward smaller y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// True for `Up` and `Down`, which query by x.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether `a` lies further along this direction than `b`.
    fn beyond(self, a: Point, b: Point) -> bool {
        match self {
            Self::Up => a.y > b.y,
            Self::Down => a.y < b.y,
            Self::Left => a.x < b.x,
            Self::Right => a.x > b.x,
        }
    }
}

/// A segment query that has no exact answer.
///
/// Each variant still carries a best-effort point; see [`TangentError::fallback`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum TangentError {
    /// The queried coordinate lies outside the segment's range.
    #[error("coordinate {value} is outside the segment's range")]
    OutOfRange {
        /// The queried x or y.
        value: f64,
        /// The segment endpoint closest to the query.
        nearest: Point,
    },
    /// A vertical segment was queried by x, which matches every point on it.
    #[error("vertical segment has no single point at x = {value}")]
    UndefinedSlope {
        /// The queried x.
        value: f64,
        /// The endpoint in the query direction.
        fallback: Point,
    },
}

impl TangentError {
    /// The best-effort point carried by the error.
    pub fn fallback(&self) -> Point {
        match *self {
            Self::OutOfRange { nearest, .. } => nearest,
            Self::UndefinedSlope { fallback, .. } => fallback,
        }
    }
}

impl Segment {
    /// Point on the segment reached from `from` along `dir`.
    ///
    /// `Up` and `Down` query by `from.x`; `Left` and `Right` query by `from.y`.
    /// A vertical segment queried by x fails with [`TangentError::UndefinedSlope`]
    /// carrying its top endpoint for `Up` and its bottom endpoint for `Down`.
    /// A horizontal segment queried at its own y returns `start` for `Left` and
    /// `end` for `Right`.
    pub fn try_tangent_point(&self, from: Point, dir: Direction) -> Result<Point, TangentError> {
        match dir {
            Direction::Up | Direction::Down => {
                self.point_at_x(from.x).map_err(|err| match err {
                    TangentError::UndefinedSlope { value, .. } => TangentError::UndefinedSlope {
                        value,
                        fallback: if dir == Direction::Up {
                            self.top()
                        } else {
                            self.bottom()
                        },
                    },
                    other => other,
                })
            }
            Direction::Left | Direction::Right => {
                let p = self.point_at_y(from.y)?;
                if self.is_horizontal() && dir == Direction::Right {
                    Ok(self.end())
                } else {
                    Ok(p)
                }
            }
        }
    }

    /// Displacement from `from` to [`Segment::try_tangent_point`].
    pub fn try_tangent_offset(&self, from: Point, dir: Direction) -> Result<Vec2, TangentError> {
        self.try_tangent_point(from, dir).map(|p| p - from)
    }

    /// Like [`Segment::try_tangent_offset`], using the error's fallback point on failure.
    pub fn tangent_offset(&self, from: Point, dir: Direction) -> Vec2 {
        self.try_tangent_point(from, dir)
            .unwrap_or_else(|err| err.fallback())
            - from
    }
}

impl Aabb {
    /// Point on the box edge named by `dir`, with the other coordinate of `from`
    /// clamped into the box.
    pub fn tangent_point(&self, from: Point, dir: Direction) -> Point {
        let (min, max) = (self.min(), self.max());
        let x = clamp(from.x, min.x, max.x);
        let y = clamp(from.y, min.y, max.y);
        match dir {
            Direction::Up => Point::new(x, max.y),
            Direction::Down => Point::new(x, min.y),
            Direction::Left => Point::new(min.x, y),
            Direction::Right => Point::new(max.x, y),
        }
    }
}

impl Polygon {
    /// The extremal edge tangent point along `dir`.
    ///
    /// Every edge is queried. The result furthest along `dir` wins; when no edge
    /// has an exact answer the furthest fallback point is used. `None` only for an
    /// empty polygon.
    pub fn tangent_point(&self, from: Point, dir: Direction) -> Option<Point> {
        let mut best: Option<Point> = None;
        let mut fallback: Option<Point> = None;
        for edge in self.edges() {
            match edge.try_tangent_point(from, dir) {
                Ok(p) => {
                    if best.is_none_or(|b| dir.beyond(p, b)) {
                        best = Some(p);
                    }
                }
                Err(err) => {
                    let p = err.fallback();
                    if fallback.is_none_or(|b| dir.beyond(p, b)) {
                        fallback = Some(p);
                    }
                }
            }
        }
        best.or(fallback)
    }
}

/// Displacement from `from` to the boundary of `shape` along `dir`.
///
/// A point shape yields the displacement to that point whatever the direction.
/// Segment queries without an exact answer use their fallback point, and an empty
/// polygon yields [`Vec2::ZERO`].
pub fn tangent_offset(shape: &Shape, from: Point, dir: Direction) -> Vec2 {
    match shape {
        Shape::Point(p) => *p - from,
        Shape::Aabb(b) => b.tangent_point(from, dir) - from,
        Shape::Segment(s) => s.tangent_offset(from, dir),
        Shape::Polygon(poly) => poly
            .tangent_point(from, dir)
            .map_or(Vec2::ZERO, |p| p - from),
    }
}
