//! Core plugin: shared resources, the per-frame system chain and the
//! start/stop lifecycle.
//!
//! ```text
//!   OnEnter(InGame):  build the Stage (player first), reset timers
//!   Update (InGame):  Input -> Logic -> Draw, each a fixed chain
//!   OnEnter(Stopped): drain the lists, report the score, exit
//! ```

use bevy::prelude::*;

use crate::common::rng::GameRng;
use crate::common::state::GameState;
use crate::common::tunables::{ConfigSource, Tunables};
use crate::common::visuals::{GameVisuals, Visuals};
use crate::plugins::enemies::{self, SpawnTimer};
use crate::plugins::world::{self, Background};
use crate::plugins::{fighters, hud, player, projectiles, render};
use crate::stage::Stage;

/// Phases of one frame, run in this order while in game.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Logic,
    Draw,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();

    let tunables = app.world().resource::<Tunables>().clone();
    let mut visuals = Visuals::default();
    let ids = GameVisuals::register(&mut visuals, &tunables.assets);

    app.insert_resource(visuals)
        .insert_resource(ids)
        .init_resource::<GameRng>()
        .configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Logic, FrameSet::Draw)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(Startup, report_config)
        .add_systems(OnEnter(GameState::InGame), start_stage)
        .add_systems(OnEnter(GameState::Stopped), stop_stage)
        .add_systems(
            Update,
            (player::gather_input, request_quit).in_set(FrameSet::Input),
        )
        .add_systems(
            Update,
            (
                world::scroll_background,
                player::update_player,
                fighters::update_fighters,
                projectiles::update_bullets,
                enemies::spawn_enemies,
            )
                .chain()
                .in_set(FrameSet::Logic),
        )
        .add_systems(
            Update,
            (
                render::prepare_frame,
                world::draw_background,
                fighters::draw_fighters,
                projectiles::draw_bullets,
                hud::draw_hud,
            )
                .chain()
                .in_set(FrameSet::Draw),
        );
}

fn report_config(tunables: Res<Tunables>, source: Option<Res<ConfigSource>>) {
    match source.as_deref() {
        Some(ConfigSource::File(path)) => info!("tunables loaded from {}", path.display()),
        Some(ConfigSource::Fallback(reason)) => warn!("{reason}; using default tunables"),
        Some(ConfigSource::Defaults) | None => info!("using default tunables"),
    }
    debug!(
        "screen {}x{} at {} fps",
        tunables.screen_width, tunables.screen_height, tunables.target_fps
    );
}

/// Fresh stage with the player as the first fighter.
fn start_stage(mut commands: Commands, tunables: Res<Tunables>, visuals: Res<Visuals>, ids: Res<GameVisuals>) -> Result {
    let player = player::spawn_player(&tunables, &visuals, &ids);
    let stage = Stage::new(player, tunables.max_actors_per_list)?;

    info!("stage ready, player at {:?}", tunables.player_start);
    commands.insert_resource(stage);
    commands.insert_resource(SpawnTimer::default());
    commands.insert_resource(Background::default());
    Ok(())
}

fn request_quit(keys: Option<Res<ButtonInput<KeyCode>>>, mut next: ResMut<NextState<GameState>>) {
    if keys.is_some_and(|k| k.just_pressed(KeyCode::Escape)) {
        info!("quit requested");
        next.set(GameState::Stopped);
    }
}

fn stop_stage(mut commands: Commands, stage: Option<ResMut<Stage>>, mut exit: MessageWriter<AppExit>) {
    if let Some(mut stage) = stage {
        let released = stage.drain();
        info!("final score {}, released {released} actors", stage.score);
        commands.remove_resource::<Stage>();
    }
    exit.write(AppExit::Success);
}
