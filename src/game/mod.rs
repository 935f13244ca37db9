//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render/audio) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::prelude::*;
use bevy::window::{WindowCloseRequested, WindowResolution};

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins;

// Only compile these imports on Windows.
#[cfg(target_os = "windows")]
use bevy::render::{
    settings::{Backends, PowerPreference, WgpuSettings},
    RenderPlugin,
};

pub fn run() -> AppExit {
    App::new().add_plugins(configure_full).run()
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    let (tunables, source) = Tunables::load_or_default();

    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: "Shooter".into(),
                resolution: WindowResolution::new(tunables.screen_width, tunables.screen_height),
                resizable: false,
                ..default()
            }),
            // Closing goes through GameState::Stopped like Escape does.
            close_when_requested: false,
            ..default()
        })
        .set(ImagePlugin::default_nearest());

    // Force DX12 and the high-performance adapter on Windows.
    #[cfg(target_os = "windows")]
    let default_plugins = default_plugins.set(RenderPlugin {
        render_creation: WgpuSettings {
            backends: Some(Backends::DX12),
            power_preference: PowerPreference::HighPerformance,
            ..default()
        }
        .into(),
        ..default()
    });

    app.add_plugins(default_plugins)
        .insert_resource(tunables)
        .insert_resource(source)
        .add_systems(Update, stop_on_close_request);

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera, presenter, audio output, pacing).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}

fn stop_on_close_request(
    mut requests: MessageReader<WindowCloseRequested>,
    mut next: ResMut<NextState<GameState>>,
) {
    if requests.read().next().is_some() {
        info!("window close requested");
        next.set(GameState::Stopped);
    }
}
