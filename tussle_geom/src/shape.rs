// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of collider shapes.

use kurbo::{Point, Vec2};

use crate::aabb::Aabb;
use crate::collide;
use crate::point::Translate;
use crate::polygon::Polygon;
use crate::segment::Segment;
use crate::tangent::{self, Direction};

/// A collider shape: one of the four primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A single point.
    Point(Point),
    /// An axis-aligned box.
    Aabb(Aabb),
    /// A line segment.
    Segment(Segment),
    /// A closed polygon.
    Polygon(Polygon),
}

/// Variant tag of a [`Shape`], without its data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// [`Shape::Point`].
    Point,
    /// [`Shape::Aabb`].
    Aabb,
    /// [`Shape::Segment`].
    Segment,
    /// [`Shape::Polygon`].
    Polygon,
}

impl Shape {
    /// The variant tag.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Aabb(_) => ShapeKind::Aabb,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Axis-aligned bounds of the shape.
    pub fn bounds(&self) -> Aabb {
        match self {
            Self::Point(p) => Aabb::new(*p, *p),
            Self::Aabb(b) => *b,
            Self::Segment(s) => s.bounds(),
            Self::Polygon(p) => p.bounds(),
        }
    }

    /// Whether the point lies on or inside the shape.
    pub fn contains(&self, p: Point) -> bool {
        collide::overlaps(self, &Self::Point(p))
    }

    /// Whether the two shapes overlap. Symmetric; see [`overlaps`](crate::overlaps).
    pub fn overlaps(&self, other: &Self) -> bool {
        collide::overlaps(self, other)
    }

    /// Displacement from `from` to the shape's boundary along `dir`.
    /// See [`tangent_offset`](crate::tangent_offset).
    pub fn tangent_offset(&self, from: Point, dir: Direction) -> Vec2 {
        tangent::tangent_offset(self, from, dir)
    }
}

impl Translate for Shape {
    fn translate(&mut self, delta: Vec2) {
        match self {
            Self::Point(p) => p.translate(delta),
            Self::Aabb(b) => b.translate(delta),
            Self::Segment(s) => s.translate(delta),
            Self::Polygon(p) => p.translate(delta),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Aabb> for Shape {
    fn from(b: Aabb) -> Self {
        Self::Aabb(b)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}
