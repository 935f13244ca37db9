//! Projectiles plugin: the bullet list.
//!
//! ```text
//!   update_player (fire_bullet)  -> appends to Stage::bullets
//!   update_bullets               -> move, resolve hits, prune
//!   draw_bullets                 -> one blit per live bullet
//! ```
//!
//! A bullet leaves the list on the frame it hits an opposing fighter or
//! passes the right edge of the screen. Bullets that fly off the top, the
//! bottom or the left edge are never removed; the player only shoots right.

use bevy::prelude::*;

use crate::common::error::StageError;
use crate::common::tunables::Tunables;
use crate::common::visuals::VisualId;
use crate::plugins::render::FrameBuffer;
use crate::stage::collision::bullet_hits_any_fighter;
use crate::stage::{Actor, ActorId, ActorList, Stage};

/// What a new bullet looks like and how fast it flies (pixels per frame).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSpec {
    pub visual: VisualId,
    pub size: UVec2,
    pub speed: f32,
}

/// Append a bullet level with the shooter's vertical centre, moving right.
///
/// Halves are taken in whole pixels before subtracting.
pub fn fire_bullet(bullets: &mut ActorList, shooter: &Actor, spec: BulletSpec) -> Result<ActorId, StageError> {
    let offset = (shooter.size.y / 2) as f32 - (spec.size.y / 2) as f32;
    let bullet = Actor::new(shooter.side(), spec.visual, spec.size, shooter.pos + Vec2::new(0.0, offset))
        .with_velocity(Vec2::new(spec.speed, 0.0))
        .with_health(1);

    bullets.append(bullet)
}

/// Move every bullet one step and drop the spent ones. Returns how many left.
pub fn advance_bullets(stage: &mut Stage, screen_width: f32) -> usize {
    let Stage { fighters, bullets, score, .. } = stage;

    bullets.prune(
        |_, bullet| {
            bullet.advance();
            bullet_hits_any_fighter(bullet, fighters, score) || bullet.pos.x > screen_width
        },
        |_, _| {},
    )
}

pub fn update_bullets(mut stage: ResMut<Stage>, tunables: Res<Tunables>) {
    let before = stage.score;
    let removed = advance_bullets(&mut stage, tunables.screen_width as f32);

    if stage.score != before {
        debug!("score {} -> {}", before, stage.score);
    }
    if removed > 0 {
        trace!("{removed} bullets retired");
    }
}

pub fn draw_bullets(stage: Res<Stage>, mut frame: ResMut<FrameBuffer>) {
    for (_, bullet) in &stage.bullets {
        frame.blit_actor(bullet);
    }
}
