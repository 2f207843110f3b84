// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairwise overlap predicates.
//!
//! ## Overview
//!
//! [`overlaps`] is a double-dispatch table over the sixteen ordered pairs of
//! [`Shape`] variants. Each unordered pair has exactly one implementation; the
//! mirrored arm calls it with the operands swapped, so the result never depends
//! on argument order.
//!
//! ## Pairs
//!
//! | pair              | test                                                            |
//! |-------------------|-----------------------------------------------------------------|
//! | point / point     | exact equality                                                  |
//! | point / box       | inclusive range on both axes                                    |
//! | point / segment   | bounds, then distance to the line within [`TOLERANCE`]          |
//! | point / polygon   | on an edge, or crossing-number ray cast                         |
//! | box / box         | separating axis                                                 |
//! | box / segment     | an endpoint inside, or a crossing with one of the four edges    |
//! | box / polygon     | corner inside, vertex inside, or an edge crossing               |
//! | segment / segment | Cramer's rule, collinear overlap for parallel segments          |
//! | segment / polygon | an edge crossing, or the segment inside                         |
//! | polygon / polygon | an edge crossing, or one inside the other                       |
//!
//! Every level rejects early on disjoint bounds. Degenerate shapes never panic:
//! zero-length segments act as points and empty polygons overlap nothing.
//!
//! [`TOLERANCE`]: crate::TOLERANCE

use crate::aabb::Aabb;
use crate::segment::Segment;
use crate::shape::Shape;

/// Whether two shapes overlap (share at least one point, boundaries included).
///
/// Symmetric: `overlaps(a, b) == overlaps(b, a)` for every pair.
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    use Shape::*;
    match (a, b) {
        (Point(p), Point(q)) => p == q,

        (Point(p), Aabb(bx)) | (Aabb(bx), Point(p)) => bx.contains(*p),
        (Point(p), Segment(s)) | (Segment(s), Point(p)) => s.contains(*p),
        (Point(p), Polygon(poly)) | (Polygon(poly), Point(p)) => poly.contains(*p),

        (Aabb(x), Aabb(y)) => x.overlaps(y),
        (Aabb(bx), Segment(s)) | (Segment(s), Aabb(bx)) => aabb_segment(bx, s),
        (Aabb(bx), Polygon(poly)) | (Polygon(poly), Aabb(bx)) => poly.intersects_aabb(bx),

        (Segment(s), Segment(t)) => s.intersects(t),
        (Segment(s), Polygon(poly)) | (Polygon(poly), Segment(s)) => poly.intersects_segment(s),

        (Polygon(x), Polygon(y)) => x.intersects_polygon(y),
    }
}

fn aabb_segment(bx: &Aabb, s: &Segment) -> bool {
    if s.is_degenerate() {
        return bx.contains(s.start());
    }
    if !bx.overlaps(&s.bounds()) {
        return false;
    }
    bx.contains(s.start()) || bx.contains(s.end()) || bx.edges().iter().any(|e| e.intersects(s))
}
