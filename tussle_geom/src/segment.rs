// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments with cached slope, intercept and bounds.

use kurbo::{Point, Vec2};

use crate::TOLERANCE;
use crate::aabb::Aabb;
use crate::point::Translate;
use crate::tangent::TangentError;
use crate::util::det;

/// A line segment between two points.
///
/// Endpoints are stored in canonical order: `start.x <= end.x`, and for vertical
/// segments `start.y <= end.y`. The constructor swaps them when needed, so
/// `Segment::new(a, b) == Segment::new(b, a)`.
///
/// The slope is `+inf` for vertical segments, in which case the intercept is NaN
/// and is never consulted. A segment whose endpoints coincide is *degenerate*; it
/// behaves exactly like its single point in every predicate.
#[derive(Copy, Clone, Debug)]
pub struct Segment {
    start: Point,
    end: Point,
    slope: f64,
    intercept: f64,
    bounds: Aabb,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        // Caches are derived from the endpoints (and the intercept may be NaN).
        self.start == other.start && self.end == other.end
    }
}

impl Segment {
    /// Create a segment between `a` and `b`, in any order.
    pub fn new(a: Point, b: Point) -> Self {
        let swap = a.x > b.x || (a.x == b.x && a.y > b.y);
        let (start, end) = if swap { (b, a) } else { (a, b) };
        let dx = end.x - start.x;
        let slope = if dx == 0.0 {
            f64::INFINITY
        } else {
            (end.y - start.y) / dx
        };
        let intercept = if slope.is_finite() {
            start.y - slope * start.x
        } else {
            f64::NAN
        };
        Self {
            start,
            end,
            slope,
            intercept,
            bounds: Aabb::new(start, end),
        }
    }

    /// Left (or, for vertical segments, lower) endpoint.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Right (or, for vertical segments, upper) endpoint.
    pub fn end(&self) -> Point {
        self.end
    }

    /// `dy / dx`; `+inf` when vertical.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The `b` of `y = m*x + b`; NaN when vertical.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Bounding box of the two endpoints.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// True when both endpoints share an x coordinate (degenerate segments included).
    pub fn is_vertical(&self) -> bool {
        self.slope.is_infinite()
    }

    /// True for a non-degenerate segment with zero slope.
    pub fn is_horizontal(&self) -> bool {
        self.slope == 0.0
    }

    /// True when the endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Endpoint with the larger y.
    pub fn top(&self) -> Point {
        if self.start.y > self.end.y {
            self.start
        } else {
            self.end
        }
    }

    /// Endpoint with the smaller y.
    pub fn bottom(&self) -> Point {
        if self.start.y > self.end.y {
            self.end
        } else {
            self.start
        }
    }

    /// Whether the point lies on the segment, within [`TOLERANCE`] of the line.
    ///
    /// Points outside the segment's bounds are rejected first; for vertical
    /// segments only the y range is exact and x uses the tolerance.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return p == self.start;
        }
        if self.is_vertical() {
            return p.y >= self.bounds.min().y
                && p.y <= self.bounds.max().y
                && (p.x - self.start.x).abs() < TOLERANCE;
        }
        if !self.bounds.contains(p) {
            return false;
        }
        (p.y - (self.slope * p.x + self.intercept)).abs() < TOLERANCE
    }

    /// Whether the two segments share at least one point.
    ///
    /// Uses Cramer's rule on the two line equations. The intersection must be
    /// finite and fall inside both segments' bounds (widened by [`TOLERANCE`]
    /// for rounding). Parallel segments overlap only when they are collinear
    /// and their ranges overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_degenerate() {
            return other.contains(self.start);
        }
        if other.is_degenerate() {
            return self.contains(other.start);
        }
        if !self.bounds.overlaps(&other.bounds) {
            return false;
        }
        match self.line_intersection(other) {
            Some(p) => {
                self.bounds.contains_within(p, TOLERANCE)
                    && other.bounds.contains_within(p, TOLERANCE)
            }
            // Bounds already overlap; for collinear segments that means the ranges do too.
            None => self.on_line(other.start) && self.on_line(other.end),
        }
    }

    /// Intersection of the infinite lines through both segments.
    ///
    /// Returns `None` when the lines are parallel (zero determinant) or the result
    /// is not finite.
    pub fn line_intersection(&self, other: &Self) -> Option<Point> {
        let (a, b, c, d) = (self.start, self.end, other.start, other.end);
        let denom = det(a.x - b.x, a.y - b.y, c.x - d.x, c.y - d.y);
        if denom == 0.0 {
            return None;
        }
        let ab = det(a.x, a.y, b.x, b.y);
        let cd = det(c.x, c.y, d.x, d.y);
        let x = det(ab, a.x - b.x, cd, c.x - d.x) / denom;
        let y = det(ab, a.y - b.y, cd, c.y - d.y) / denom;
        (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
    }

    /// Point on the segment at the given x.
    ///
    /// Outside `[start.x, end.x]` this fails with [`TangentError::OutOfRange`] and the
    /// nearest endpoint. A vertical segment has no single point for an x and fails
    /// with [`TangentError::UndefinedSlope`], falling back to its top endpoint.
    pub fn point_at_x(&self, x: f64) -> Result<Point, TangentError> {
        if x < self.start.x {
            return Err(TangentError::OutOfRange {
                value: x,
                nearest: self.start,
            });
        }
        if x > self.end.x {
            return Err(TangentError::OutOfRange {
                value: x,
                nearest: self.end,
            });
        }
        if self.is_vertical() {
            return Err(TangentError::UndefinedSlope {
                value: x,
                fallback: self.top(),
            });
        }
        Ok(Point::new(x, self.slope * x + self.intercept))
    }

    /// Point on the segment at the given y.
    ///
    /// Outside the segment's y range this fails with [`TangentError::OutOfRange`] and
    /// the nearest endpoint. A horizontal segment matches every x, so its `start` is
    /// returned.
    pub fn point_at_y(&self, y: f64) -> Result<Point, TangentError> {
        if y < self.bounds.min().y {
            return Err(TangentError::OutOfRange {
                value: y,
                nearest: self.bottom(),
            });
        }
        if y > self.bounds.max().y {
            return Err(TangentError::OutOfRange {
                value: y,
                nearest: self.top(),
            });
        }
        if self.is_vertical() {
            return Ok(Point::new(self.start.x, y));
        }
        if self.is_horizontal() {
            return Ok(self.start);
        }
        Ok(Point::new((y - self.intercept) / self.slope, y))
    }

    fn on_line(&self, p: Point) -> bool {
        let dir = self.end - self.start;
        let cross = dir.cross(p - self.start);
        cross * cross < TOLERANCE * TOLERANCE * dir.hypot2()
    }
}

impl Translate for Segment {
    fn translate(&mut self, delta: Vec2) {
        *self = Self::new(self.start + delta, self.end + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn constructor_orders_endpoints() {
        let s = seg(5.0, 5.0, 0.0, 0.0);
        assert_eq!(s.start(), Point::new(0.0, 0.0));
        assert_eq!(s.end(), Point::new(5.0, 5.0));
        assert_eq!(s, seg(0.0, 0.0, 5.0, 5.0));

        let v = seg(2.0, 9.0, 2.0, 1.0);
        assert_eq!(v.start(), Point::new(2.0, 1.0));
        assert_eq!(v.end(), Point::new(2.0, 9.0));
        assert!(v.is_vertical());
        assert!(v.slope().is_infinite());
        assert!(v.intercept().is_nan());
        assert_eq!(v, v, "equality must ignore the NaN intercept");
    }

    #[test]
    fn caches_follow_translation() {
        let mut s = seg(0.0, 1.0, 4.0, 3.0);
        assert_eq!(s.slope(), 0.5);
        assert_eq!(s.intercept(), 1.0);
        s.translate(Vec2::new(2.0, 1.0));
        assert_eq!(s.start(), Point::new(2.0, 2.0));
        assert_eq!(s.slope(), 0.5);
        assert_eq!(s.intercept(), 1.0);
        assert_eq!(
            s.bounds(),
            Aabb::new(Point::new(2.0, 2.0), Point::new(6.0, 4.0))
        );
    }

    #[test]
    fn contains_point() {
        assert!(seg(0.0, 0.0, 5.0, 5.0).contains(Point::new(2.0, 2.0)));
        assert!(!seg(0.0, 0.0, 5.0, 1.0).contains(Point::new(2.0, 2.0)));
        // Off the end of the line.
        assert!(!seg(0.0, 0.0, 5.0, 5.0).contains(Point::new(6.0, 6.0)));
        // Within tolerance of the line.
        assert!(seg(0.0, 0.0, 5.0, 5.0).contains(Point::new(2.0, 2.005)));
        assert!(!seg(0.0, 0.0, 5.0, 5.0).contains(Point::new(2.0, 2.05)));
        // Vertical: tolerance on x, exact y range.
        let v = seg(1.0, 0.0, 1.0, 4.0);
        assert!(v.contains(Point::new(1.005, 2.0)));
        assert!(!v.contains(Point::new(1.0, 4.5)));
        assert!(!v.contains(Point::new(1.5, 2.0)));
    }

    #[test]
    fn crossing_segments() {
        let s = seg(0.0, 0.0, 5.0, 5.0);
        assert!(s.intersects(&seg(1.0, 2.0, 6.0, 2.1)));
        assert!(!s.intersects(&seg(0.0, 1.0, 5.0, 6.0)));
        // Vertical against horizontal.
        assert!(seg(2.0, 0.0, 2.0, 4.0).intersects(&seg(0.0, 2.0, 4.0, 2.0)));
        assert!(!seg(2.0, 0.0, 2.0, 4.0).intersects(&seg(3.0, 2.0, 4.0, 2.0)));
        // Lines cross, segments do not.
        assert!(!s.intersects(&seg(3.0, 0.0, 4.0, 0.5)));
        // Shared endpoint.
        assert!(s.intersects(&seg(5.0, 5.0, 9.0, 0.0)));
    }

    #[test]
    fn parallel_segments() {
        let s = seg(0.0, 0.0, 4.0, 4.0);
        // Collinear and overlapping.
        assert!(s.intersects(&seg(2.0, 2.0, 6.0, 6.0)));
        assert!(s.intersects(&s));
        // Collinear, disjoint ranges.
        assert!(!s.intersects(&seg(5.0, 5.0, 6.0, 6.0)));
        // Parallel, distinct lines with overlapping bounds.
        assert!(!s.intersects(&seg(0.0, 1.0, 3.0, 4.0)));
        // Collinear verticals.
        assert!(seg(1.0, 0.0, 1.0, 2.0).intersects(&seg(1.0, 1.0, 1.0, 3.0)));
        assert!(!seg(1.0, 0.0, 1.0, 2.0).intersects(&seg(1.5, 1.0, 1.5, 3.0)));
    }

    #[test]
    fn degenerate_segment_acts_as_point() {
        let d = seg(1.0, 1.0, 1.0, 1.0);
        assert!(d.is_degenerate());
        assert!(d.contains(Point::new(1.0, 1.0)));
        assert!(!d.contains(Point::new(1.001, 1.0)));
        assert!(d.intersects(&seg(0.0, 0.0, 2.0, 2.0)));
        assert!(seg(0.0, 0.0, 2.0, 2.0).intersects(&d));
        assert!(!d.intersects(&seg(0.0, 1.0, 2.0, 3.0)));
        assert!(d.intersects(&d));
        assert!(d.line_intersection(&seg(0.0, 0.0, 2.0, 2.0)).is_none());
    }

    #[test]
    fn point_at_x_and_y() {
        let s = seg(0.0, 1.0, 4.0, 3.0);
        assert_eq!(s.point_at_x(2.0), Ok(Point::new(2.0, 2.0)));
        assert_eq!(s.point_at_y(2.0), Ok(Point::new(2.0, 2.0)));
        assert_eq!(
            s.point_at_x(-1.0),
            Err(TangentError::OutOfRange {
                value: -1.0,
                nearest: Point::new(0.0, 1.0)
            })
        );
        assert_eq!(
            s.point_at_y(7.0),
            Err(TangentError::OutOfRange {
                value: 7.0,
                nearest: Point::new(4.0, 3.0)
            })
        );

        let v = seg(1.0, 0.0, 1.0, 4.0);
        assert_eq!(
            v.point_at_x(1.0),
            Err(TangentError::UndefinedSlope {
                value: 1.0,
                fallback: Point::new(1.0, 4.0)
            })
        );
        assert_eq!(v.point_at_y(3.0), Ok(Point::new(1.0, 3.0)));

        let h = seg(0.0, 2.0, 4.0, 2.0);
        assert_eq!(h.point_at_y(2.0), Ok(Point::new(0.0, 2.0)));
        assert!(h.point_at_y(2.5).is_err());
    }

    #[test]
    fn downward_slope_range_uses_bounds() {
        let s = seg(0.0, 4.0, 4.0, 0.0);
        assert_eq!(s.top(), Point::new(0.0, 4.0));
        assert_eq!(s.bottom(), Point::new(4.0, 0.0));
        assert_eq!(s.point_at_y(1.0), Ok(Point::new(3.0, 1.0)));
        assert_eq!(
            s.point_at_y(-1.0),
            Err(TangentError::OutOfRange {
                value: -1.0,
                nearest: Point::new(4.0, 0.0)
            })
        );
    }
}
