//! HUD: the score line, drawn last so it sits on top.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::common::visuals::GameVisuals;
use crate::plugins::render::FrameBuffer;
use crate::stage::Stage;

pub mod font;

use font::BitmapFont;

pub const SCORE_POS: Vec2 = Vec2::new(10.0, 10.0);

pub fn score_line(score: u32) -> String {
    format!("SCORE: {score:03}")
}

pub fn draw_hud(
    stage: Res<Stage>,
    ids: Res<GameVisuals>,
    tunables: Res<Tunables>,
    mut frame: ResMut<FrameBuffer>,
) {
    let font = BitmapFont {
        atlas: ids.font,
        glyph: UVec2::new(tunables.glyph_width, tunables.glyph_height),
    };
    font.draw_text(&mut frame, SCORE_POS, Color::WHITE, &score_line(stage.score));
}
