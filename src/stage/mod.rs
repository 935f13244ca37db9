//! Gameplay core: actors, the two actor lists and collision.
//!
//! Nothing in here knows about Bevy schedules. The plugins wrap these types in
//! systems; tests drive them directly.

pub mod actor;
pub mod collision;
pub mod list;

use bevy::prelude::*;

use crate::common::error::{ListKind, StageError};

pub use actor::{Actor, Bounds, Side};
pub use list::{ActorId, ActorList, Link};

/// Aggregate root of a running game: fighters (player included), bullets
/// and the score.
#[derive(Resource, Debug)]
pub struct Stage {
    pub fighters: ActorList,
    pub bullets: ActorList,
    pub score: u32,
    player: ActorId,
}

impl Stage {
    /// Build a stage whose fighter list starts with `player`.
    pub fn new(player: Actor, capacity: usize) -> Result<Self, StageError> {
        let mut fighters = ActorList::new(ListKind::Fighters, capacity);
        let player = fighters.append(player)?;

        Ok(Self {
            fighters,
            bullets: ActorList::new(ListKind::Bullets, capacity),
            score: 0,
            player,
        })
    }

    #[inline]
    pub fn player_id(&self) -> ActorId {
        self.player
    }

    pub fn player(&self) -> Result<&Actor, StageError> {
        self.fighters.get(self.player).ok_or(StageError::MissingPlayer)
    }

    pub fn player_mut(&mut self) -> Result<&mut Actor, StageError> {
        self.fighters.get_mut(self.player).ok_or(StageError::MissingPlayer)
    }

    /// Drop every actor. Only used on shutdown; the player goes too.
    pub fn drain(&mut self) -> usize {
        self.fighters.clear() + self.bullets.clear()
    }
}
