// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher implementation.
//!
//! ## Overview
//!
//! Drives the per-frame passes over a [`Registry`]:
//!
//! - [`Dispatcher::collide`] tests every ordered pair of collidable entities and
//!   delivers a [`Contact`] for each overlapping collider pair.
//! - [`Dispatcher::input`], [`Dispatcher::tick`] and [`Dispatcher::draw`] fan an
//!   event out to the entities declaring the matching capability.
//! - [`Dispatcher::step`] runs one frame: collision, then tick.
//!
//! ## Snapshots
//!
//! Every pass copies the registry when it starts and iterates that copy.
//! Callbacks may add or remove entities: the registry changes immediately, but an
//! entity removed mid-pass still receives the rest of the pass, and an entity
//! added mid-pass waits for the next one.
//!
//! ## Errors
//!
//! The first callback error stops the pass and is returned as is. Registry
//! changes made before it stay in effect.

use alloc::vec::Vec;
use core::convert::Infallible;

use tracing::{debug, trace};
use tussle_geom::{Shape, overlaps};

use crate::actors::Actors;
use crate::registry::Registry;
use crate::types::{Capabilities, Contact, InputEvent};

/// Per-frame driver over a [`Registry`].
///
/// ## Usage
///
/// - Register entities through [`Dispatcher::registry_mut`].
/// - Optionally restrict collision pairs with [`Dispatcher::set_collision_filter`].
/// - Each frame, feed input with [`Dispatcher::input`], call [`Dispatcher::step`],
///   and call [`Dispatcher::draw`] when rendering.
pub struct Dispatcher<K> {
    registry: Registry<K>,
    filter: Option<fn(&K, &K) -> bool>,
}

impl<K: Copy + Eq> core::fmt::Debug for Dispatcher<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("entities", &self.registry.len())
            .field("filtered", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq> Default for Dispatcher<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> Dispatcher<K> {
    /// Create a dispatcher with an empty registry and no collision filter.
    pub fn new() -> Self {
        Self::with_registry(Registry::new())
    }

    /// Create a dispatcher over an existing registry.
    pub fn with_registry(registry: Registry<K>) -> Self {
        Self {
            registry,
            filter: None,
        }
    }

    /// The registry.
    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    /// The registry, for adding and removing entities between passes.
    pub fn registry_mut(&mut self) -> &mut Registry<K> {
        &mut self.registry
    }

    /// Set an optional filter; only ordered pairs `(actor, other)` it accepts are tested.
    pub fn set_collision_filter(&mut self, filter: Option<fn(&K, &K) -> bool>) {
        self.filter = filter;
    }

    /// Run the collision pass. Returns the number of contacts delivered.
    ///
    /// For every ordered pair of distinct snapshot entries where both declare
    /// [`COLLIDERS`](Capabilities::COLLIDERS), the first also declares
    /// [`COLLISION`](Capabilities::COLLISION), the handles differ and the
    /// collision filter accepts the pair, each collider of the first is tested
    /// against each collider of the second. Every overlap calls
    /// [`Actors::on_collision`] on the first. Colliders are queried once per
    /// entry at the start of the pass.
    pub fn collide<A: Actors<K>>(&mut self, actors: &mut A) -> Result<usize, A::Error> {
        let snapshot = self.registry.snapshot();
        debug!(entities = snapshot.len(), "collision pass");
        let colliders = fetch_colliders(&snapshot, actors);
        let registry = &mut self.registry;
        let count = sweep(&snapshot, &colliders, self.filter, |i, j, contact| {
            trace!(actor = i, other = j, "contact");
            actors.on_collision(contact, registry)
        })?;
        debug!(contacts = count, "collision pass done");
        Ok(count)
    }

    /// Deliver an input event to every entity declaring [`InputEvent::capability`].
    pub fn input<A: Actors<K>>(
        &mut self,
        actors: &mut A,
        event: &InputEvent,
    ) -> Result<(), A::Error> {
        self.fan_out(event.capability(), |actor, registry| match *event {
            InputEvent::Keyboard { key, action } => {
                actors.on_keyboard(actor, key, action, registry)
            }
            InputEvent::MouseButton {
                button,
                action,
                position,
            } => actors.on_mouse_button(actor, button, action, position, registry),
            InputEvent::MouseMove { position } => actors.on_mouse_move(actor, position, registry),
            InputEvent::MouseEnter { position, entered } => {
                actors.on_mouse_enter(actor, position, entered, registry)
            }
            InputEvent::Scroll { offset } => actors.on_scroll(actor, offset, registry),
            InputEvent::Focus { focused } => actors.on_focus(actor, focused, registry),
            InputEvent::Resize { width, height } => {
                actors.on_resize(actor, width, height, registry)
            }
            InputEvent::JoystickButton { button, action } => {
                actors.on_joystick_button(actor, button, action, registry)
            }
            InputEvent::JoystickAxis { axis, value } => {
                actors.on_joystick_axis(actor, axis, value, registry)
            }
            InputEvent::Character { ch } => actors.on_character(actor, ch, registry),
        })
    }

    /// Call [`Actors::on_tick`] on every [`TICK`](Capabilities::TICK) entity.
    pub fn tick<A: Actors<K>>(&mut self, actors: &mut A) -> Result<(), A::Error> {
        self.fan_out(Capabilities::TICK, |actor, registry| {
            actors.on_tick(actor, registry)
        })
    }

    /// Call [`Actors::on_draw`] on every [`DRAW`](Capabilities::DRAW) entity.
    pub fn draw<A: Actors<K>>(&mut self, actors: &mut A) -> Result<(), A::Error> {
        self.fan_out(Capabilities::DRAW, |actor, registry| {
            actors.on_draw(actor, registry)
        })
    }

    /// One frame: the collision pass, then the tick pass.
    ///
    /// Returns the number of contacts delivered. A collision error skips the tick.
    pub fn step<A: Actors<K>>(&mut self, actors: &mut A) -> Result<usize, A::Error> {
        let contacts = self.collide(actors)?;
        self.tick(actors)?;
        Ok(contacts)
    }

    /// Whether `shape` overlaps any collider of any
    /// [`COLLIDERS`](Capabilities::COLLIDERS) entity.
    pub fn collides<A: Actors<K>>(&self, actors: &A, shape: &Shape) -> bool {
        self.registry
            .iter()
            .filter(|(_, caps)| caps.contains(Capabilities::COLLIDERS))
            .any(|(k, _)| actors.colliders(&k).iter().any(|s| overlaps(s, shape)))
    }

    /// The `(actor, other)` pairs the collision pass would report, without
    /// calling back. One entry per pair of registry entries, however many of
    /// their colliders overlap.
    pub fn contacts<A: Actors<K>>(&self, actors: &A) -> Vec<(K, K)> {
        let snapshot = self.registry.snapshot();
        let colliders = fetch_colliders(&snapshot, actors);
        let mut out = Vec::new();
        let mut last = None;
        let Ok(_) = sweep::<K, Infallible>(&snapshot, &colliders, self.filter, |i, j, contact| {
            if last != Some((i, j)) {
                last = Some((i, j));
                out.push((contact.actor, contact.other));
            }
            Ok(())
        });
        out
    }

    fn fan_out<E>(
        &mut self,
        wanted: Capabilities,
        mut deliver: impl FnMut(K, &mut Registry<K>) -> Result<(), E>,
    ) -> Result<(), E> {
        let snapshot = self.registry.snapshot();
        debug!(entities = snapshot.len(), capability = ?wanted, "fan-out pass");
        for (actor, caps) in snapshot {
            if caps.contains(wanted) {
                deliver(actor, &mut self.registry)?;
            }
        }
        Ok(())
    }
}

fn fetch_colliders<K, A: Actors<K>>(snapshot: &[(K, Capabilities)], actors: &A) -> Vec<Vec<Shape>> {
    snapshot
        .iter()
        .map(|(k, caps)| {
            if caps.contains(Capabilities::COLLIDERS) {
                actors.colliders(k)
            } else {
                Vec::new()
            }
        })
        .collect()
}

/// Visit every overlapping collider pair, passing the snapshot positions of both
/// entries. Stops at the first error. Returns the number of visits.
fn sweep<K: Copy + Eq, E>(
    snapshot: &[(K, Capabilities)],
    colliders: &[Vec<Shape>],
    filter: Option<fn(&K, &K) -> bool>,
    mut hit: impl FnMut(usize, usize, &Contact<'_, K>) -> Result<(), E>,
) -> Result<usize, E> {
    let mut count = 0;
    for (i, &(actor, caps)) in snapshot.iter().enumerate() {
        if !caps.contains(Capabilities::COLLIDABLE) {
            continue;
        }
        for (j, &(other, other_caps)) in snapshot.iter().enumerate() {
            if i == j || actor == other || !other_caps.contains(Capabilities::COLLIDERS) {
                continue;
            }
            if let Some(f) = filter
                && !f(&actor, &other)
            {
                continue;
            }
            for collider in &colliders[i] {
                for culprit in &colliders[j] {
                    if overlaps(collider, culprit) {
                        let contact = Contact {
                            actor,
                            collider,
                            other,
                            culprit,
                        };
                        hit(i, j, &contact)?;
                        count += 1;
                    }
                }
            }
        }
    }
    Ok(count)
}
