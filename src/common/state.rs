//! Global state machine.
//!
//! There is a single gameplay state. `Stopped` exists only so quitting goes
//! through an explicit shutdown path instead of tearing the process down.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    Stopped,
}
