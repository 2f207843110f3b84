// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed polygons.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::aabb::Aabb;
use crate::point::Translate;
use crate::segment::Segment;

/// A closed polygon given by its vertex loop.
///
/// Edge `i` joins `vertices[i]` and `vertices[(i + 1) % n]`; the last edge closes
/// the loop. Edges are stored as canonical [`Segment`]s, so an edge's `start` may
/// be either loop endpoint. Vertices are not deduplicated and the polygon is not
/// checked for self-intersection: containment uses the even-odd rule, which stays
/// well defined for such polygons.
///
/// Any number of vertices is accepted. With fewer than three the polygon is
/// [degenerate](Polygon::is_degenerate); with none it has no edges and overlaps nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
    bounds: Aabb,
}

impl Polygon {
    /// Create a polygon from its vertex loop.
    pub fn new(vertices: impl IntoIterator<Item = Point>) -> Self {
        let mut polygon = Self {
            vertices: vertices.into_iter().collect(),
            edges: Vec::new(),
            bounds: Aabb::ZERO,
        };
        polygon.rebuild();
        polygon
    }

    fn rebuild(&mut self) {
        let n = self.vertices.len();
        self.edges = (0..n)
            .map(|i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
            .collect();
        self.bounds = Aabb::from_points(self.vertices.iter().copied()).unwrap_or(Aabb::ZERO);
    }

    /// The vertex loop, in construction order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The edges; edge `i` starts at vertex `i` in loop order.
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Union bounds of all vertices (the zero box when empty).
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when the polygon has fewer than three vertices.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Whether the point lies inside the polygon or on its boundary.
    ///
    /// Points on an edge (within [`TOLERANCE`](crate::TOLERANCE)) are inside.
    /// Otherwise this casts a horizontal ray from the point to the right, past the
    /// bounding box, and counts the edges it crosses; an odd count means inside.
    /// An edge counts only when exactly one of its endpoints lies strictly above
    /// the ray, so a ray through a shared vertex is counted once, and horizontal
    /// edges never count.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() || !self.bounds.contains(p) {
            return false;
        }
        if self.edges.iter().any(|e| e.contains(p)) {
            return true;
        }
        self.crossings(p) % 2 == 1
    }

    fn crossings(&self, p: Point) -> usize {
        let n = self.vertices.len();
        let mut count = 0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                // Exactly one endpoint is above the ray, so `b.y != a.y`.
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if x > p.x {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether any edge crosses the segment.
    fn crosses(&self, segment: &Segment) -> bool {
        self.edges.iter().any(|e| e.intersects(segment))
    }

    /// Whether the segment touches the polygon: crosses an edge or lies inside.
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        if segment.is_degenerate() {
            return self.contains(segment.start());
        }
        if self.is_empty() || !segment.bounds().overlaps(&self.bounds) {
            return false;
        }
        self.crosses(segment) || self.contains(segment.start())
    }

    /// Whether the box touches the polygon.
    ///
    /// True when a box corner is inside the polygon, a vertex is inside the box,
    /// or a box edge crosses a polygon edge.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        if self.is_empty() || !aabb.overlaps(&self.bounds) {
            return false;
        }
        aabb.corners().into_iter().any(|c| self.contains(c))
            || self.vertices.iter().any(|v| aabb.contains(*v))
            || aabb.edges().iter().any(|e| self.crosses(e))
    }

    /// Whether two polygons touch: an edge pair crosses, or one contains the other.
    pub fn intersects_polygon(&self, other: &Self) -> bool {
        let (Some(&first), Some(&other_first)) = (self.vertices.first(), other.vertices.first())
        else {
            return false;
        };
        if !self.bounds.overlaps(&other.bounds) {
            return false;
        }
        self.edges.iter().any(|e| other.crosses(e))
            || other.contains(first)
            || self.contains(other_first)
    }
}

impl Translate for Polygon {
    fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
        self.rebuild();
    }
}
