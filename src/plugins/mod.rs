//! Feature plugins.

use bevy::prelude::*;

pub mod core;
pub mod enemies;
pub mod fighters;
pub mod hud;
pub mod player;
pub mod projectiles;
pub mod render;
pub mod world;

// Message storage is gameplay; the output side is render-only.
pub mod audio;

// Render-only
pub mod camera;
pub mod pacing;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    audio::plugin(app);
    render::plugin(app);
    world::plugin(app);
    player::plugin(app);
    enemies::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
    render::present::plugin(app);
    audio::output_plugin(app);
    pacing::plugin(app);
}

