// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tussle Actors: a deterministic, `no_std` entity registry and dispatch loop.
//!
//! ## Overview
//!
//! The host keeps its own entity data and refers to entities through a copyable
//! handle `K`. It registers each handle with the [`Capabilities`](types::Capabilities)
//! the entity takes part in, and implements [`Actors`](actors::Actors) to provide
//! colliders and callbacks. The [`Dispatcher`](dispatch::Dispatcher) then drives
//! the frame:
//!
//! 1) Input: [`Dispatcher::input`](dispatch::Dispatcher::input) hands each
//!    [`InputEvent`](types::InputEvent) to the entities declaring its capability.
//! 2) Step: [`Dispatcher::step`](dispatch::Dispatcher::step) runs the collision
//!    pass, which delivers a [`Contact`](types::Contact) for every overlapping
//!    collider pair, then ticks every `TICK` entity.
//! 3) Draw: [`Dispatcher::draw`](dispatch::Dispatcher::draw) visits every `DRAW`
//!    entity, on whatever cadence the renderer needs.
//!
//! Dispatch order is registry insertion order. Each pass iterates a snapshot of
//! the registry taken when it starts, so callbacks can add and remove entities
//! freely; their changes apply from the next pass.
//!
//! ## Example
//!
//! ```
//! use tussle_actors::actors::Actors;
//! use tussle_actors::dispatch::Dispatcher;
//! use tussle_actors::registry::Registry;
//! use tussle_actors::types::{Capabilities, Contact};
//! use tussle_geom::{Aabb, Point, Shape};
//!
//! struct Boxes {
//!     bounds: Vec<Aabb>,
//!     hits: Vec<(usize, usize)>,
//! }
//!
//! impl Actors<usize> for Boxes {
//!     type Error = core::convert::Infallible;
//!
//!     fn colliders(&self, actor: &usize) -> Vec<Shape> {
//!         vec![Shape::Aabb(self.bounds[*actor])]
//!     }
//!
//!     fn on_collision(
//!         &mut self,
//!         contact: &Contact<'_, usize>,
//!         _registry: &mut Registry<usize>,
//!     ) -> Result<(), Self::Error> {
//!         self.hits.push((contact.actor, contact.other));
//!         Ok(())
//!     }
//! }
//!
//! let mut boxes = Boxes {
//!     bounds: vec![
//!         Aabb::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0)),
//!         Aabb::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0)),
//!         Aabb::new(Point::new(8.0, 8.0), Point::new(9.0, 9.0)),
//!     ],
//!     hits: Vec::new(),
//! };
//! let mut dispatcher = Dispatcher::new();
//! for id in 0..boxes.bounds.len() {
//!     dispatcher.registry_mut().add(id, Capabilities::COLLIDABLE);
//! }
//! let contacts = dispatcher.step(&mut boxes).unwrap();
//! assert_eq!(contacts, 2);
//! assert_eq!(boxes.hits, [(0, 1), (1, 0)]);
//! ```
//!
//! ## Logging
//!
//! Passes emit [`tracing`] events: `debug` when a pass starts and when the
//! collision pass ends, `trace` per contact.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod actors;
pub mod dispatch;
pub mod registry;
pub mod types;
