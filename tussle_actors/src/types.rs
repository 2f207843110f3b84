// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for dispatch: capabilities, input events and contacts.
//!
//! ## Overview
//!
//! An entity declares what it takes part in with a [`Capabilities`] set when it
//! is registered. The [`Dispatcher`](crate::dispatch::Dispatcher) only delivers an
//! [`InputEvent`] to entities whose set contains [`InputEvent::capability`], and
//! only runs collision checks between entities declaring the collision bits.

use kurbo::{Point, Vec2};
use tussle_geom::Shape;

bitflags::bitflags! {
    /// Behaviours an entity takes part in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        /// Owns collider shapes that others can hit.
        const COLLIDERS       = 1 << 0;
        /// Receives contacts when its colliders hit another entity's.
        const COLLISION       = 1 << 1;
        /// Receives [`InputEvent::Keyboard`].
        const KEYBOARD        = 1 << 2;
        /// Receives [`InputEvent::MouseButton`].
        const MOUSE_BUTTON    = 1 << 3;
        /// Receives [`InputEvent::MouseMove`].
        const MOUSE_MOVE      = 1 << 4;
        /// Receives [`InputEvent::MouseEnter`].
        const MOUSE_ENTER     = 1 << 5;
        /// Receives [`InputEvent::Scroll`].
        const SCROLL          = 1 << 6;
        /// Receives [`InputEvent::Focus`].
        const FOCUS           = 1 << 7;
        /// Receives [`InputEvent::Resize`].
        const RESIZE          = 1 << 8;
        /// Receives [`InputEvent::JoystickButton`].
        const JOYSTICK_BUTTON = 1 << 9;
        /// Receives [`InputEvent::JoystickAxis`].
        const JOYSTICK_AXIS   = 1 << 10;
        /// Receives [`InputEvent::Character`].
        const CHARACTER       = 1 << 11;
        /// Receives per-frame ticks.
        const TICK            = 1 << 12;
        /// Receives draw requests.
        const DRAW            = 1 << 13;

        /// Every input event kind.
        const INPUT = Self::KEYBOARD.bits()
            | Self::MOUSE_BUTTON.bits()
            | Self::MOUSE_MOVE.bits()
            | Self::MOUSE_ENTER.bits()
            | Self::SCROLL.bits()
            | Self::FOCUS.bits()
            | Self::RESIZE.bits()
            | Self::JOYSTICK_BUTTON.bits()
            | Self::JOYSTICK_AXIS.bits()
            | Self::CHARACTER.bits();
        /// Both sides of collision: owns colliders and receives contacts.
        const COLLIDABLE = Self::COLLIDERS.bits() | Self::COLLISION.bits();
    }
}

/// State of a key or button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Released.
    Release,
    /// Pressed this frame.
    Press,
    /// Auto-repeat from the platform.
    Repeat,
    /// Still held down since an earlier press.
    Hold,
}

/// Platform key code, passed through unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Key(pub i32);

/// Platform mouse button code, passed through unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct MouseButton(pub i32);

/// A raw input event. Values are carried verbatim; nothing is decoded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key changed state.
    Keyboard {
        /// Key code.
        key: Key,
        /// New state.
        action: Action,
    },
    /// A mouse button changed state.
    MouseButton {
        /// Button code.
        button: MouseButton,
        /// New state.
        action: Action,
        /// Cursor position when it happened.
        position: Point,
    },
    /// The cursor moved.
    MouseMove {
        /// New cursor position.
        position: Point,
    },
    /// The cursor entered or left the window.
    MouseEnter {
        /// Cursor position.
        position: Point,
        /// True on enter, false on leave.
        entered: bool,
    },
    /// Scroll wheel or trackpad scroll.
    Scroll {
        /// Scroll amount on both axes.
        offset: Vec2,
    },
    /// The window gained or lost focus.
    Focus {
        /// True when focused.
        focused: bool,
    },
    /// The window was resized.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// A joystick button changed state.
    JoystickButton {
        /// Button index.
        button: u32,
        /// New state.
        action: Action,
    },
    /// A joystick axis moved.
    JoystickAxis {
        /// Axis index.
        axis: u32,
        /// Axis value.
        value: f64,
    },
    /// Text input produced a character.
    Character {
        /// The character.
        ch: char,
    },
}

impl InputEvent {
    /// The capability an entity needs to receive this event.
    pub fn capability(&self) -> Capabilities {
        match self {
            Self::Keyboard { .. } => Capabilities::KEYBOARD,
            Self::MouseButton { .. } => Capabilities::MOUSE_BUTTON,
            Self::MouseMove { .. } => Capabilities::MOUSE_MOVE,
            Self::MouseEnter { .. } => Capabilities::MOUSE_ENTER,
            Self::Scroll { .. } => Capabilities::SCROLL,
            Self::Focus { .. } => Capabilities::FOCUS,
            Self::Resize { .. } => Capabilities::RESIZE,
            Self::JoystickButton { .. } => Capabilities::JOYSTICK_BUTTON,
            Self::JoystickAxis { .. } => Capabilities::JOYSTICK_AXIS,
            Self::Character { .. } => Capabilities::CHARACTER,
        }
    }
}

/// One collider-against-collider hit, delivered to the entity that owns `collider`.
///
/// Produced by [`Dispatcher::collide`](crate::dispatch::Dispatcher::collide).
#[derive(Copy, Clone, Debug)]
pub struct Contact<'a, K> {
    /// The entity receiving the contact.
    pub actor: K,
    /// The receiving entity's collider that was hit.
    pub collider: &'a Shape,
    /// The entity that was hit.
    pub other: K,
    /// The other entity's collider that overlaps `collider`.
    pub culprit: &'a Shape,
}
