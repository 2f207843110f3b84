// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host side of dispatch: colliders and per-capability callbacks.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use tussle_geom::Shape;

use crate::registry::Registry;
use crate::types::{Action, Contact, Key, MouseButton};

/// Behaviour of the entities behind the handles in a [`Registry`].
///
/// The host owns its entity data and implements this trait over it; the
/// [`Dispatcher`](crate::dispatch::Dispatcher) only sees handles. Every callback
/// has a no-op default, so a host implements just the capabilities it declares.
///
/// Callbacks receive the registry and may add or remove entities. Changes apply
/// to the registry at once, but the running pass keeps iterating the snapshot it
/// took at its start.
///
/// Returning an error aborts the running pass; the dispatcher hands it back
/// unchanged.
pub trait Actors<K> {
    /// Error type returned by callbacks.
    type Error;

    /// Collider shapes of `actor`, in world space.
    ///
    /// Queried once per collision pass for every entity declaring
    /// [`COLLIDERS`](crate::types::Capabilities::COLLIDERS).
    fn colliders(&self, _actor: &K) -> Vec<Shape> {
        Vec::new()
    }

    /// One of the actor's colliders overlaps a collider of another entity.
    fn on_collision(
        &mut self,
        _contact: &Contact<'_, K>,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A key changed state.
    fn on_keyboard(
        &mut self,
        _actor: K,
        _key: Key,
        _action: Action,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A mouse button changed state at `position`.
    fn on_mouse_button(
        &mut self,
        _actor: K,
        _button: MouseButton,
        _action: Action,
        _position: Point,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The cursor moved.
    fn on_mouse_move(
        &mut self,
        _actor: K,
        _position: Point,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The cursor entered (`entered == true`) or left the window.
    fn on_mouse_enter(
        &mut self,
        _actor: K,
        _position: Point,
        _entered: bool,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Scroll input.
    fn on_scroll(
        &mut self,
        _actor: K,
        _offset: Vec2,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The window gained or lost focus.
    fn on_focus(
        &mut self,
        _actor: K,
        _focused: bool,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The window was resized.
    fn on_resize(
        &mut self,
        _actor: K,
        _width: u32,
        _height: u32,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A joystick button changed state.
    fn on_joystick_button(
        &mut self,
        _actor: K,
        _button: u32,
        _action: Action,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A joystick axis moved.
    fn on_joystick_axis(
        &mut self,
        _actor: K,
        _axis: u32,
        _value: f64,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Text input.
    fn on_character(
        &mut self,
        _actor: K,
        _ch: char,
        _registry: &mut Registry<K>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// One frame elapsed.
    fn on_tick(&mut self, _actor: K, _registry: &mut Registry<K>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Draw the actor.
    fn on_draw(&mut self, _actor: K, _registry: &mut Registry<K>) -> Result<(), Self::Error> {
        Ok(())
    }
}
