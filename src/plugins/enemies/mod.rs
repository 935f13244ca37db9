//! Enemies plugin: a countdown spawner feeding aliens in from the right edge.
//!
//! The countdown is decremented before it is checked, so a timer of 0 or 1
//! spawns on the next frame. Every spawn rolls a fresh interval.

use bevy::prelude::*;

use crate::common::error::StageError;
use crate::common::rng::GameRng;
use crate::common::tunables::Tunables;
use crate::common::visuals::{GameVisuals, VisualId, Visuals};
use crate::stage::{Actor, ActorId, Side, Stage};

/// Frames until the next alien.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer(pub i32);

pub fn plugin(app: &mut App) {
    app.init_resource::<SpawnTimer>();
}

/// Tick the countdown and spawn one alien when it runs out.
pub fn tick_spawner(
    stage: &mut Stage,
    timer: &mut SpawnTimer,
    rng: &mut GameRng,
    tunables: &Tunables,
    visual: VisualId,
    size: UVec2,
) -> Result<Option<ActorId>, StageError> {
    timer.0 -= 1;
    if timer.0 > 0 {
        return Ok(None);
    }

    let x = tunables.screen_width as f32;
    let y = rng.below(tunables.screen_height as i32) as f32;
    let speed = tunables.enemy_base_speed + rng.below(tunables.enemy_speed_jitter);

    let alien = Actor::new(Side::Alien, visual, size, Vec2::new(x, y))
        .with_velocity(Vec2::new(-speed as f32, 0.0))
        .with_health(1);
    let id = stage.fighters.append(alien)?;

    timer.0 = tunables.spawn_interval_min + rng.below(tunables.spawn_interval_jitter);
    Ok(Some(id))
}

pub fn spawn_enemies(
    mut stage: ResMut<Stage>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<GameRng>,
    tunables: Res<Tunables>,
    visuals: Res<Visuals>,
    ids: Res<GameVisuals>,
) -> Result {
    let size = visuals.size(ids.enemy);
    if let Some(id) = tick_spawner(&mut stage, &mut timer, &mut rng, &tunables, ids.enemy, size)? {
        debug!("alien {id:?} spawned, next in {} frames", timer.0);
    }
    Ok(())
}
