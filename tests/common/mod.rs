//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bevy_shooter::game::configure_headless` to install gameplay plugins.
//!
//! There is no input plugin, so a `ButtonInput<KeyCode>` inserted by a test
//! keeps its pressed keys until the test releases them.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_shooter::common::rng::GameRng;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((MinimalPlugins, StatesPlugin));
    bevy_shooter::game::configure_headless(&mut app);
    app.insert_resource(GameRng::seeded(11));
    app
}

/// Headless app with a keyboard holding `keys`.
pub fn app_holding(keys: &[KeyCode]) -> App {
    let mut app = app_headless();
    let mut input = ButtonInput::<KeyCode>::default();
    for key in keys {
        input.press(*key);
    }
    app.insert_resource(input);
    app
}
