//! Visual asset table.
//!
//! Actors hold a [`VisualId`], never the image itself. The table is filled once
//! at startup and outlives every actor, so destroying an actor never touches it.
//! Sizes start at the configured value and are replaced by the real image size
//! once the render side has loaded it.

use bevy::prelude::*;

use super::tunables::{AssetPaths, VisualSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualId(u32);

impl VisualId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct VisualInfo {
    pub path: String,
    pub size: UVec2,
    pub fallback: Color,
}

#[derive(Resource, Debug, Default)]
pub struct Visuals {
    entries: Vec<VisualInfo>,
}

impl Visuals {
    /// Register a visual, or return the existing id for an already known path.
    pub fn load(&mut self, spec: &VisualSpec) -> VisualId {
        if let Some(i) = self.entries.iter().position(|v| v.path == spec.path) {
            return VisualId(i as u32);
        }

        self.entries.push(VisualInfo {
            path: spec.path.clone(),
            size: spec.size(),
            fallback: spec.fallback_color(),
        });
        VisualId((self.entries.len() - 1) as u32)
    }

    /// Pixel size of a visual. Unknown ids report zero, which never overlaps.
    pub fn size(&self, id: VisualId) -> UVec2 {
        self.entries.get(id.index()).map_or(UVec2::ZERO, |v| v.size)
    }

    pub fn get(&self, id: VisualId) -> Option<&VisualInfo> {
        self.entries.get(id.index())
    }

    pub fn set_size(&mut self, id: VisualId, size: UVec2) {
        if let Some(v) = self.entries.get_mut(id.index()) {
            v.size = size;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualId, &VisualInfo)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, v)| (VisualId(i as u32), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ids of the visuals the game itself uses.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GameVisuals {
    pub player: VisualId,
    pub bullet: VisualId,
    pub enemy: VisualId,
    pub background: VisualId,
    pub font: VisualId,
}

impl GameVisuals {
    pub fn register(visuals: &mut Visuals, paths: &AssetPaths) -> Self {
        Self {
            player: visuals.load(&paths.player),
            bullet: visuals.load(&paths.bullet),
            enemy: visuals.load(&paths.enemy),
            background: visuals.load(&paths.background),
            font: visuals.load(&paths.font),
        }
    }
}
