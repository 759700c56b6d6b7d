//! Entities - the capability set resolvers work against
//!
//! Resolvers never name a concrete entity type. Obstacles only need a
//! rectangle (`Collider`); anything that gets pushed around additionally
//! exposes velocity, ground flag and a displacement accumulator (`Body`).
//! The concrete types below are what the scene container stores.

use crate::core::geometry::{Rect, Vec2};

use super::keys::KeyBindings;

/// Anything with a collision rectangle
pub trait Collider {
    fn rect(&self) -> &Rect;
}

/// A collider whose state the engine corrects
pub trait Body: Collider {
    fn rect_mut(&mut self) -> &mut Rect;
    fn velocity(&self) -> Vec2;
    fn velocity_mut(&mut self) -> &mut Vec2;
    fn set_on_ground(&mut self, on_ground: bool);
    fn add_displacement(&mut self, d: Vec2);
    /// Identity reported in death notifications
    fn id(&self) -> u32;

    fn is_moving(&self) -> bool {
        !self.velocity().is_zero()
    }

    fn add_velocity(&mut self, dv: Vec2) {
        *self.velocity_mut() += dv;
    }
}

/// A platform that carries whatever rests on it
pub trait Carrier: Collider {
    /// Displacement of the platform this frame
    fn displacement(&self) -> Vec2;
}

pub trait Toggle: Collider {
    fn is_on(&self) -> bool;
    fn turn_off(&mut self);
}

pub trait Gate: Collider {
    fn is_closed(&self) -> bool;
}

/// One of the two cooperating players
#[derive(Clone, Debug, Default)]
pub struct Player {
    pub num: u32,
    pub rect: Rect,
    pub velocity: Vec2,
    pub on_ground: bool,
    /// Platform-induced motion, consumed by the host integrator
    pub displacement: Vec2,
    pub keybinds: KeyBindings,
}

impl Player {
    pub fn new(num: u32, rect: Rect) -> Self {
        Self {
            num,
            rect,
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }

    pub fn with_keybinds(mut self, keybinds: KeyBindings) -> Self {
        self.keybinds = keybinds;
        self
    }

    /// Hand the accumulated displacement to the integrator and reset it.
    pub fn take_displacement(&mut self) -> Vec2 {
        std::mem::take(&mut self.displacement)
    }
}

impl Collider for Player {
    fn rect(&self) -> &Rect { &self.rect }
}

impl Body for Player {
    fn rect_mut(&mut self) -> &mut Rect { &mut self.rect }

    fn velocity(&self) -> Vec2 { self.velocity }

    fn velocity_mut(&mut self) -> &mut Vec2 { &mut self.velocity }

    fn set_on_ground(&mut self, on_ground: bool) { self.on_ground = on_ground; }

    fn add_displacement(&mut self, d: Vec2) { self.displacement += d; }

    fn id(&self) -> u32 { self.num }
}

/// Static rectangle: walls, platforms, spikes, bosses
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Block {
    pub rect: Rect,
}

impl Block {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h) }
    }
}

impl Collider for Block {
    fn rect(&self) -> &Rect { &self.rect }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovingPlatform {
    pub rect: Rect,
    pub dx: f32,
    pub dy: f32,
}

impl MovingPlatform {
    pub fn new(rect: Rect, dx: f32, dy: f32) -> Self {
        Self { rect, dx, dy }
    }
}

impl Collider for MovingPlatform {
    fn rect(&self) -> &Rect { &self.rect }
}

impl Carrier for MovingPlatform {
    fn displacement(&self) -> Vec2 { Vec2::new(self.dx, self.dy) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Switch {
    pub rect: Rect,
    pub on: bool,
}

impl Switch {
    pub fn new(rect: Rect, on: bool) -> Self {
        Self { rect, on }
    }
}

impl Collider for Switch {
    fn rect(&self) -> &Rect { &self.rect }
}

impl Toggle for Switch {
    fn is_on(&self) -> bool { self.on }

    fn turn_off(&mut self) { self.on = false; }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Door {
    pub rect: Rect,
    pub closed: bool,
}

impl Door {
    pub fn new(rect: Rect, closed: bool) -> Self {
        Self { rect, closed }
    }
}

impl Collider for Door {
    fn rect(&self) -> &Rect { &self.rect }
}

impl Gate for Door {
    fn is_closed(&self) -> bool { self.closed }
}
