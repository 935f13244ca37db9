//! Bitmap font: one row of fixed-size glyphs for ASCII `' '..='Z'`.

use bevy::prelude::*;

use crate::common::visuals::VisualId;
use crate::plugins::render::FrameBuffer;

pub const FIRST_GLYPH: char = ' ';
pub const LAST_GLYPH: char = 'Z';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    pub atlas: VisualId,
    pub glyph: UVec2,
}

impl BitmapFont {
    /// Source rectangle of `c` in the atlas, `None` if the font lacks it.
    pub fn glyph_rect(&self, c: char) -> Option<URect> {
        if !(FIRST_GLYPH..=LAST_GLYPH).contains(&c) {
            return None;
        }
        let x = (c as u32 - FIRST_GLYPH as u32) * self.glyph.x;
        Some(URect::new(x, 0, x + self.glyph.x, self.glyph.y))
    }

    /// Blit `text` left to right from `pos`. Unknown characters are skipped
    /// without moving the pen. Returns the pen position after the last glyph.
    pub fn draw_text(&self, frame: &mut FrameBuffer, pos: Vec2, tint: Color, text: &str) -> Vec2 {
        let mut pen = pos;
        for src in text.chars().filter_map(|c| self.glyph_rect(c)) {
            frame.blit_region(self.atlas, src, pen, tint);
            pen.x += self.glyph.x as f32;
        }
        pen
    }
}
