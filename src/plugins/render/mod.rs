//! Render gateway.
//!
//! Draw systems never touch sprites. They append [`DrawCommand`]s to the
//! [`FrameBuffer`] in painter's order (later commands cover earlier ones),
//! and the render-only presenter turns the buffer into pooled sprites.
//!
//! ```text
//!   Update:     prepare_frame (clear) -> draw_* systems (append)
//!   PostUpdate: present::present_frame (buffer -> sprite pool)
//! ```

use bevy::prelude::*;

use crate::common::visuals::VisualId;
use crate::stage::Actor;

pub mod present;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Whole image stretched to `size`, top-left corner at `pos`.
    Blit { visual: VisualId, pos: Vec2, size: UVec2 },
    /// Sub-rectangle `src` of the image at `pos`, tinted.
    BlitRegion { visual: VisualId, src: URect, pos: Vec2, tint: Color },
}

impl DrawCommand {
    pub fn visual(&self) -> VisualId {
        match self {
            Self::Blit { visual, .. } | Self::BlitRegion { visual, .. } => *visual,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Self::Blit { pos, .. } | Self::BlitRegion { pos, .. } => *pos,
        }
    }
}

/// Everything drawn this frame, in draw order.
#[derive(Resource, Debug, Default)]
pub struct FrameBuffer {
    commands: Vec<DrawCommand>,
}

impl FrameBuffer {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn blit(&mut self, visual: VisualId, pos: Vec2, size: UVec2) {
        self.commands.push(DrawCommand::Blit { visual, pos, size });
    }

    pub fn blit_region(&mut self, visual: VisualId, src: URect, pos: Vec2, tint: Color) {
        self.commands.push(DrawCommand::BlitRegion { visual, src, pos, tint });
    }

    /// Blit an actor at its position with its own size.
    pub fn blit_actor(&mut self, actor: &Actor) {
        self.blit(actor.visual, actor.pos, actor.size);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<FrameBuffer>();
}

/// Start a new frame.
pub fn prepare_frame(mut frame: ResMut<FrameBuffer>) {
    frame.clear();
}

#[cfg(test)]
mod tests;
