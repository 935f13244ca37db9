//! Player plugin.
//!
//! Pipeline (Update, one logic tick per frame):
//! - gather_input: copy held keys into the `PlayerInput` resource
//! - update_player: velocity from keys, reload countdown, firing, movement, clamping
//!
//! Input is level-triggered: holding fire keeps shooting every `reload_frames`.

use bevy::prelude::*;

use crate::common::error::StageError;
use crate::common::tunables::Tunables;
use crate::common::visuals::{GameVisuals, Visuals};
use crate::plugins::audio::{Channel, PlaySound, SoundEffect};
use crate::plugins::projectiles::{self, BulletSpec};
use crate::stage::{Actor, ActorId, Side, Stage};

/// Held state of the keys the player uses, sampled once per frame.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>();
}

/// The player ship at its start position.
pub fn spawn_player(tunables: &Tunables, visuals: &Visuals, ids: &GameVisuals) -> Actor {
    let (x, y) = tunables.player_start;
    Actor::new(Side::Player, ids.player, visuals.size(ids.player), Vec2::new(x, y)).with_health(1)
}

pub fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    *input = PlayerInput {
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
        fire: keys.pressed(KeyCode::Space),
    };
}

pub fn update_player(
    mut stage: ResMut<Stage>,
    input: Res<PlayerInput>,
    tunables: Res<Tunables>,
    visuals: Res<Visuals>,
    ids: Res<GameVisuals>,
    mut sounds: MessageWriter<PlaySound>,
) -> Result {
    let bullet = BulletSpec {
        visual: ids.bullet,
        size: visuals.size(ids.bullet),
        speed: tunables.bullet_speed,
    };

    if let Some(id) = control_player(&mut stage, &input, &tunables, bullet)? {
        debug!("player fired {id:?}");
        sounds.write(PlaySound::new(SoundEffect::PlayerFire, Channel::Player));
    }
    Ok(())
}

/// One frame of player control. Returns the bullet fired this frame, if any.
///
/// The shot leaves from where the ship was before this frame's movement.
pub fn control_player(
    stage: &mut Stage,
    input: &PlayerInput,
    tunables: &Tunables,
    bullet: BulletSpec,
) -> Result<Option<ActorId>, StageError> {
    let speed = tunables.player_speed;
    let player = stage.player_mut()?;

    player.vel = Vec2::ZERO;
    player.reload = player.reload.saturating_sub(1);

    // Later keys win within an axis; the two axes add up.
    if input.up {
        player.vel.y = -speed;
    }
    if input.down {
        player.vel.y = speed;
    }
    if input.left {
        player.vel.x = -speed;
    }
    if input.right {
        player.vel.x = speed;
    }

    let shooter = if input.fire && player.reload == 0 {
        player.reload = tunables.reload_frames;
        Some(player.clone())
    } else {
        None
    };

    player.advance();
    clamp_to_screen(player, tunables.screen_size());

    shooter
        .map(|shooter| projectiles::fire_bullet(&mut stage.bullets, &shooter, bullet))
        .transpose()
}

/// Keep the whole sprite on screen.
pub fn clamp_to_screen(actor: &mut Actor, screen: Vec2) {
    let max = (screen - actor.size.as_vec2()).max(Vec2::ZERO);
    actor.pos = actor.pos.clamp(Vec2::ZERO, max);
}
