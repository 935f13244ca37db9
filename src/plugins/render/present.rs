//! Presenter (render-only): mirrors the frame buffer onto a sprite pool.
//!
//! Command `i` is shown by pooled sprite `i`, stacked at depth `i`. The pool
//! only grows; sprites past the end of the current frame are hidden rather
//! than despawned, so a steady frame does no structural changes.
//!
//! Gameplay uses screen space (origin top-left, y down). Bevy's 2D camera
//! looks at a centred, y-up world, hence [`screen_to_world`].

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::common::visuals::{VisualId, Visuals};

use super::{DrawCommand, FrameBuffer};

/// Depth between two consecutive draw commands.
pub const Z_STEP: f32 = 0.001;

#[derive(Component)]
pub struct FrameSprite;

#[derive(Resource, Debug, Default)]
pub struct SpritePool {
    pub sprites: Vec<Entity>,
}

/// Image handle per registered visual.
#[derive(Resource, Debug, Default)]
pub struct VisualHandles(Vec<(VisualId, Handle<Image>)>);

impl VisualHandles {
    fn get(&self, id: VisualId) -> Option<&Handle<Image>> {
        self.0.iter().find(|(v, _)| *v == id).map(|(_, h)| h)
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SpritePool>()
        .insert_resource(ClearColor(Color::srgb_u8(32, 32, 32)))
        .add_systems(PreStartup, load_images)
        .add_systems(PostUpdate, (sync_visual_sizes, present_frame).chain());
}

/// Centre of a screen-space box, as a world translation at draw depth `depth`.
pub fn screen_to_world(pos: Vec2, size: Vec2, screen: Vec2, depth: usize) -> Vec3 {
    let center = pos.trunc() + size * 0.5;
    Vec3::new(
        center.x - screen.x * 0.5,
        screen.y * 0.5 - center.y,
        depth as f32 * Z_STEP,
    )
}

fn load_images(mut commands: Commands, assets: Res<AssetServer>, visuals: Res<Visuals>) {
    let handles = visuals
        .iter()
        .map(|(id, info)| {
            info!("loading {}", info.path);
            (id, assets.load(info.path.clone()))
        })
        .collect();
    commands.insert_resource(VisualHandles(handles));
}

/// Replace configured sizes with real image sizes as images arrive.
fn sync_visual_sizes(
    mut events: MessageReader<AssetEvent<Image>>,
    images: Res<Assets<Image>>,
    handles: Res<VisualHandles>,
    mut visuals: ResMut<Visuals>,
) {
    for ev in events.read() {
        let AssetEvent::LoadedWithDependencies { id } = ev else {
            continue;
        };
        let Some(image) = images.get(*id) else {
            continue;
        };

        for (visual, handle) in &handles.0 {
            if handle.id() == *id {
                debug!("visual {visual:?} is {}", image.size());
                visuals.set_size(*visual, image.size());
            }
        }
    }
}

fn usable_image(handles: &VisualHandles, assets: &AssetServer, id: VisualId) -> Option<Handle<Image>> {
    let handle = handles.get(id)?;
    match assets.load_state(handle.id()) {
        LoadState::Failed(_) => None,
        _ => Some(handle.clone()),
    }
}

/// Sprite for one command. Missing images fall back to a flat colour box;
/// missing glyph atlases draw nothing.
fn sprite_for(
    cmd: &DrawCommand,
    visuals: &Visuals,
    handles: &VisualHandles,
    assets: &AssetServer,
) -> Option<(Sprite, Vec2)> {
    let image = usable_image(handles, assets, cmd.visual());

    match cmd {
        DrawCommand::Blit { visual, size, .. } => {
            let size = size.as_vec2();
            let sprite = match image {
                Some(image) => Sprite {
                    image,
                    custom_size: Some(size),
                    ..default()
                },
                None => {
                    let fallback = visuals.get(*visual).map_or(Color::WHITE, |v| v.fallback);
                    Sprite::from_color(fallback, size)
                }
            };
            Some((sprite, size))
        }
        DrawCommand::BlitRegion { src, tint, .. } => {
            let size = src.size().as_vec2();
            let sprite = Sprite {
                image: image?,
                rect: Some(src.as_rect()),
                custom_size: Some(size),
                color: *tint,
                ..default()
            };
            Some((sprite, size))
        }
    }
}

fn present_frame(
    mut commands: Commands,
    frame: Res<FrameBuffer>,
    visuals: Res<Visuals>,
    handles: Res<VisualHandles>,
    assets: Res<AssetServer>,
    tunables: Res<Tunables>,
    mut pool: ResMut<SpritePool>,
    mut q: Query<(&mut Sprite, &mut Transform, &mut Visibility), With<FrameSprite>>,
) {
    let screen = tunables.screen_size();

    for (i, cmd) in frame.commands().iter().enumerate() {
        let drawn = sprite_for(cmd, &visuals, &handles, &assets);

        let Some(&e) = pool.sprites.get(i) else {
            let (sprite, visibility, translation) = match drawn {
                Some((sprite, size)) => {
                    (sprite, Visibility::Visible, screen_to_world(cmd.pos(), size, screen, i))
                }
                None => (Sprite::default(), Visibility::Hidden, Vec3::ZERO),
            };
            let e = commands
                .spawn((
                    Name::new("FrameSprite"),
                    FrameSprite,
                    sprite,
                    Transform::from_translation(translation),
                    visibility,
                ))
                .id();
            pool.sprites.push(e);
            continue;
        };

        let Ok((mut sprite, mut tf, mut vis)) = q.get_mut(e) else {
            continue;
        };
        match drawn {
            Some((new_sprite, size)) => {
                *sprite = new_sprite;
                tf.translation = screen_to_world(cmd.pos(), size, screen, i);
                *vis = Visibility::Visible;
            }
            None => *vis = Visibility::Hidden,
        }
    }

    for &e in pool.sprites.iter().skip(frame.len()) {
        if let Ok((_, _, mut vis)) = q.get_mut(e) {
            *vis = Visibility::Hidden;
        }
    }
}
