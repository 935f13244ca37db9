//! Moving game objects.

use bevy::prelude::*;

use crate::common::visuals::VisualId;

/// Which team an actor fights for. Bullets only hurt the other side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Alien,
}

/// Axis-aligned box in screen space (top-left origin, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { pos: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// A fighter (player ship or alien) or a bullet.
///
/// `health == 0` marks the actor dead; the owning list drops it on its next
/// prune pass. `side` is fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub pos: Vec2,
    pub size: UVec2,
    pub vel: Vec2,
    pub health: i32,
    /// Frames until the next shot is allowed. Only the player uses it.
    pub reload: u32,
    pub visual: VisualId,
    side: Side,
}

impl Actor {
    pub fn new(side: Side, visual: VisualId, size: UVec2, pos: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            health: 0,
            reload: 0,
            visual,
            side,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    #[inline]
    pub fn kill(&mut self) {
        self.health = 0;
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds { pos: self.pos, size: self.size.as_vec2() }
    }
}
