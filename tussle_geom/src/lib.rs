// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tussle Geom: a Kurbo-native, `no_std` 2D collision kernel.
//!
//! ## Overview
//!
//! Four primitives make up the closed [`Shape`] set:
//!
//! - [`Point`]: a [`kurbo::Point`], compared exactly.
//! - [`Aabb`]: an axis-aligned box with normalized corners.
//! - [`Segment`]: a line segment with cached slope, intercept and bounds.
//! - [`Polygon`]: a closed vertex loop with cached edges and bounds.
//!
//! [`overlaps`] answers "do these two shapes share a point?" for every pair of
//! variants, symmetrically. [`tangent_offset`] answers "how far along this axis is
//! the boundary?" for collision response. Geometry is moved only through
//! [`Translate`], which keeps every cache in sync.
//!
//! ## Tolerance
//!
//! Tests that involve a line equation (point on segment, segment crossings,
//! point on a polygon edge) accept an error of [`TOLERANCE`]. Box tests and
//! point equality are exact.
//!
//! ## Example
//!
//! ```
//! use tussle_geom::{Aabb, Direction, Point, Polygon, Segment, Shape, Translate, Vec2};
//!
//! let floor = Shape::from(Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
//! let crate_box = Shape::from(Aabb::new(Point::new(2.0, 1.0), Point::new(4.0, 3.0)));
//! assert!(!crate_box.overlaps(&floor));
//!
//! // Drop the box onto the floor.
//! let fall = floor.tangent_offset(Point::new(3.0, 1.0), Direction::Down);
//! assert_eq!(fall, Vec2::new(0.0, -1.0));
//! let landed = crate_box.translated(fall);
//! assert!(landed.overlaps(&floor));
//!
//! let ramp = Shape::from(Polygon::new([
//!     Point::new(5.0, 0.0),
//!     Point::new(9.0, 0.0),
//!     Point::new(9.0, 2.0),
//! ]));
//! assert!(ramp.overlaps(&floor));
//! assert!(!ramp.overlaps(&landed));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aabb;
mod collide;
mod point;
mod polygon;
mod segment;
mod shape;
mod tangent;
mod util;

pub use kurbo::{Point, Rect, Vec2};

pub use aabb::Aabb;
pub use collide::overlaps;
pub use point::Translate;
pub use polygon::Polygon;
pub use segment::Segment;
pub use shape::{Shape, ShapeKind};
pub use tangent::{Direction, TangentError, tangent_offset};

/// Error allowed by predicates that evaluate a line equation.
pub const TOLERANCE: f64 = 0.01;
