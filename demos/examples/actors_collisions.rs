// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Falling crates.
//!
//! A few crates fall a fixed distance per tick. A crate that touches the ground
//! receives a contact and snaps onto it using a tangent offset. A collision
//! filter limits the pass to crate-ground pairs. A keyboard event spawns one more
//! crate mid-run; it joins on the next pass.
//!
//! Run:
//! - `cargo run -p tussle_demos --example actors_collisions`

use std::collections::{BTreeMap, BTreeSet};

use kurbo::{Point, Vec2};
use tussle_actors::actors::Actors;
use tussle_actors::dispatch::Dispatcher;
use tussle_actors::registry::Registry;
use tussle_actors::types::{Action, Capabilities, Contact, InputEvent, Key};
use tussle_geom::{Aabb, Direction, Segment, Shape, Translate};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Id {
    Ground,
    Crate(u32),
}

#[derive(Default)]
struct Scene {
    crates: BTreeMap<u32, Aabb>,
    resting: BTreeSet<u32>,
    ground: Option<Segment>,
    next_id: u32,
}

const FALL: Vec2 = Vec2::new(0.0, -1.5);

impl Actors<Id> for Scene {
    type Error = core::convert::Infallible;

    fn colliders(&self, actor: &Id) -> Vec<Shape> {
        match actor {
            Id::Ground => self.ground.map(Shape::Segment).into_iter().collect(),
            Id::Crate(n) => self.crates.get(n).map(|b| Shape::Aabb(*b)).into_iter().collect(),
        }
    }

    fn on_collision(
        &mut self,
        contact: &Contact<'_, Id>,
        _registry: &mut Registry<Id>,
    ) -> Result<(), Self::Error> {
        let Id::Crate(n) = contact.actor else {
            return Ok(());
        };
        println!("  contact: crate {n} hit {:?}", contact.other);
        if contact.other == Id::Ground
            && let Some(ground) = self.ground
            && let Some(b) = self.crates.get_mut(&n)
        {
            // Snap the bottom edge onto the ground.
            let bottom = Point::new(b.center().x, b.min().y);
            b.translate(ground.tangent_offset(bottom, Direction::Up));
            self.resting.insert(n);
        }
        Ok(())
    }

    fn on_keyboard(
        &mut self,
        _actor: Id,
        key: Key,
        action: Action,
        registry: &mut Registry<Id>,
    ) -> Result<(), Self::Error> {
        if action == Action::Press {
            let n = self.next_id;
            self.next_id += 1;
            let x = f64::from(key.0 % 10) * 3.0;
            self.crates
                .insert(n, Aabb::from_origin_size(Point::new(x, 6.0), 2.0, 2.0));
            registry.add(Id::Crate(n), Capabilities::COLLIDABLE | Capabilities::TICK);
            println!("  spawned crate {n} at x={x}");
        }
        Ok(())
    }

    fn on_tick(&mut self, actor: Id, _registry: &mut Registry<Id>) -> Result<(), Self::Error> {
        if let Id::Crate(n) = actor
            && !self.resting.contains(&n)
            && let Some(b) = self.crates.get_mut(&n)
        {
            b.translate(FALL);
        }
        Ok(())
    }

    fn on_draw(&mut self, actor: Id, _registry: &mut Registry<Id>) -> Result<(), Self::Error> {
        if let Id::Crate(n) = actor
            && let Some(b) = self.crates.get(&n)
        {
            println!("  crate {n}: bottom at y={:.2}", b.min().y);
        }
        Ok(())
    }
}

fn main() {
    let mut scene = Scene {
        ground: Some(Segment::new(Point::new(-10.0, 0.0), Point::new(40.0, 0.0))),
        next_id: 2,
        ..Scene::default()
    };
    scene
        .crates
        .insert(0, Aabb::from_origin_size(Point::new(0.0, 4.0), 2.0, 2.0));
    scene
        .crates
        .insert(1, Aabb::from_origin_size(Point::new(1.0, 8.0), 2.0, 2.0));

    let mut dispatcher = Dispatcher::new();
    let registry = dispatcher.registry_mut();
    // The ground owns a collider but never receives contacts. It also handles the spawn key.
    registry.add(Id::Ground, Capabilities::COLLIDERS | Capabilities::KEYBOARD);
    registry.add(
        Id::Crate(0),
        Capabilities::COLLIDABLE | Capabilities::TICK | Capabilities::DRAW,
    );
    registry.add(
        Id::Crate(1),
        Capabilities::COLLIDABLE | Capabilities::TICK | Capabilities::DRAW,
    );
    dispatcher.set_collision_filter(Some(|a: &Id, b: &Id| {
        matches!((a, b), (Id::Crate(_), Id::Ground))
    }));

    for frame in 0..6 {
        println!("== Frame {frame} ==");
        if frame == 2 {
            let spawn = InputEvent::Keyboard {
                key: Key(7),
                action: Action::Press,
            };
            let Ok(()) = dispatcher.input(&mut scene, &spawn);
        }
        let Ok(contacts) = dispatcher.step(&mut scene);
        println!("  {contacts} contacts");
        let Ok(()) = dispatcher.draw(&mut scene);
    }

    let spot = Shape::Point(Point::new(1.0, 0.0));
    println!(
        "Something at (1, 0)? {}",
        dispatcher.collides(&scene, &spot)
    );
}
