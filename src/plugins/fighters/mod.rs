//! Fighters plugin: the player ship and the aliens share one list.
//!
//! The player moves under [`crate::plugins::player`]; this pass moves the
//! aliens, scores rams against the player and retires aliens that are dead,
//! rammed or fully past the left edge.

use bevy::prelude::*;

use crate::common::error::StageError;
use crate::plugins::audio::{Channel, PlaySound, SoundEffect};
use crate::plugins::render::FrameBuffer;
use crate::stage::collision::player_overlaps_fighter;
use crate::stage::{Actor, Stage};

/// One step for every non-player fighter. `on_remove` sees each retired one.
///
/// Returns how many fighters were removed.
pub fn advance_fighters(stage: &mut Stage, mut on_remove: impl FnMut(&Actor)) -> Result<usize, StageError> {
    let player_id = stage.player_id();
    let player_box = stage.player()?.bounds();
    let Stage { fighters, score, .. } = stage;

    let removed = fighters.prune(
        |id, fighter| {
            if id == player_id {
                return false;
            }

            fighter.advance();

            let rammed = player_overlaps_fighter(player_box, fighter);
            if rammed {
                *score += 1;
            }

            rammed || fighter.is_dead() || fighter.pos.x < -(fighter.size.x as f32)
        },
        |_, fighter| on_remove(&fighter),
    );

    Ok(removed)
}

pub fn update_fighters(mut stage: ResMut<Stage>, mut sounds: MessageWriter<PlaySound>) -> Result {
    let removed = advance_fighters(&mut stage, |_| {
        sounds.write(PlaySound::new(SoundEffect::AlienDie, Channel::Any));
    })?;

    if removed > 0 {
        trace!("{removed} fighters retired, {} left", stage.fighters.len());
    }
    Ok(())
}

pub fn draw_fighters(stage: Res<Stage>, mut frame: ResMut<FrameBuffer>) {
    for (_, fighter) in &stage.fighters {
        frame.blit_actor(fighter);
    }
}
