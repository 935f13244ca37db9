//! World plugin: the endlessly scrolling background.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::common::visuals::GameVisuals;
use crate::plugins::render::FrameBuffer;

/// Horizontal offset of the first background copy, in `(-width, 0]`.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub x: i32,
}

impl Background {
    /// Move one pixel left; wrap once a whole screen width has gone by.
    pub fn scroll(&mut self, width: i32) {
        self.x -= 1;
        if self.x < -width {
            self.x = 0;
        }
    }

    /// X of every copy needed to cover `[0, width)`.
    pub fn copies(self, width: i32) -> impl Iterator<Item = i32> {
        let step = width.max(1);
        (0..)
            .map(move |i| self.x + i * step)
            .take_while(move |x| *x < width)
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<Background>();
}

pub fn scroll_background(tunables: Res<Tunables>, mut background: ResMut<Background>) {
    background.scroll(tunables.screen_width as i32);
}

pub fn draw_background(
    background: Res<Background>,
    tunables: Res<Tunables>,
    ids: Res<GameVisuals>,
    mut frame: ResMut<FrameBuffer>,
) {
    let size = UVec2::new(tunables.screen_width, tunables.screen_height);
    for x in background.copies(tunables.screen_width as i32) {
        frame.blit(ids.background, Vec2::new(x as f32, 0.0), size);
    }
}
