use bevy::prelude::*;

use super::present::{Z_STEP, screen_to_world};
use super::*;
use crate::common::test_utils::{gameplay_world, run_system_once};
use crate::common::visuals::GameVisuals;

#[test]
fn commands_keep_draw_order() {
    let world = gameplay_world();
    let ids = *world.resource::<GameVisuals>();

    let mut frame = FrameBuffer::default();
    frame.blit(ids.background, Vec2::ZERO, UVec2::new(1280, 720));
    frame.blit(ids.enemy, Vec2::new(10.0, 20.0), UVec2::new(48, 48));
    frame.blit_region(ids.font, URect::new(0, 0, 18, 28), Vec2::new(10.0, 10.0), Color::WHITE);

    let visuals: Vec<_> = frame.commands().iter().map(DrawCommand::visual).collect();
    assert_eq!(visuals, vec![ids.background, ids.enemy, ids.font]);
    assert_eq!(frame.commands()[1].pos(), Vec2::new(10.0, 20.0));
}

#[test]
fn prepare_frame_clears_previous_frame() {
    let mut world = gameplay_world();
    let ids = *world.resource::<GameVisuals>();
    let mut frame = FrameBuffer::default();
    frame.blit(ids.player, Vec2::ZERO, UVec2::new(40, 40));
    world.insert_resource(frame);

    run_system_once(&mut world, prepare_frame);

    assert!(world.resource::<FrameBuffer>().is_empty());
}

#[test]
fn top_left_of_screen_maps_to_upper_left_world() {
    let screen = Vec2::new(1280.0, 720.0);
    let t = screen_to_world(Vec2::ZERO, Vec2::new(40.0, 40.0), screen, 0);
    assert_eq!(t, Vec3::new(-620.0, 340.0, 0.0));
}

#[test]
fn full_screen_box_is_centred_and_depth_grows() {
    let screen = Vec2::new(1280.0, 720.0);
    let t = screen_to_world(Vec2::ZERO, screen, screen, 3);
    assert_eq!(t.truncate(), Vec2::ZERO);
    assert!((t.z - 3.0 * Z_STEP).abs() < 1e-6);
}

#[test]
fn fractional_positions_snap_to_whole_pixels() {
    let screen = Vec2::new(100.0, 100.0);
    let a = screen_to_world(Vec2::new(10.7, 5.2), Vec2::new(2.0, 2.0), screen, 0);
    let b = screen_to_world(Vec2::new(10.0, 5.0), Vec2::new(2.0, 2.0), screen, 0);
    assert_eq!(a, b);
}
