//! Audio gateway.
//!
//! Gameplay only writes [`PlaySound`] messages (fire-and-forget). The output
//! side, present in the full app only, maps them onto a fixed set of voice
//! channels the way a classic mixer does:
//! - [`Channel::Player`] is one reserved slot; a new sound cuts the old one.
//! - [`Channel::Any`] takes the first free slot, or is dropped when all are busy.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    PlayerFire,
    /// Loaded but never played: the player cannot die.
    PlayerDie,
    AlienDie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Any,
    Player,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaySound {
    pub effect: SoundEffect,
    pub channel: Channel,
}

impl PlaySound {
    pub fn new(effect: SoundEffect, channel: Channel) -> Self {
        Self { effect, channel }
    }
}

/// Where a new sound goes and which running voice it replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment<V> {
    pub slot: usize,
    pub evicted: Option<V>,
}

/// Fixed voice slots. Slot 0 doubles as the player channel.
#[derive(Debug, Clone)]
pub struct ChannelMixer<V> {
    voices: Vec<Option<V>>,
}

impl<V: Copy> ChannelMixer<V> {
    pub const PLAYER_SLOT: usize = 0;

    pub fn new(channels: usize) -> Self {
        Self { voices: vec![None; channels.max(1)] }
    }

    /// Forget voices that stopped since the last frame.
    pub fn release_finished(&mut self, is_playing: impl Fn(V) -> bool) {
        for voice in &mut self.voices {
            if voice.is_some_and(|v| !is_playing(v)) {
                *voice = None;
            }
        }
    }

    /// Reserve a slot for a new sound, or `None` if `Any` finds no free slot.
    pub fn assign(&mut self, channel: Channel) -> Option<Assignment<V>> {
        let slot = match channel {
            Channel::Player => Self::PLAYER_SLOT,
            Channel::Any => self.voices.iter().position(Option::is_none)?,
        };
        let evicted = self.voices[slot].take();
        Some(Assignment { slot, evicted })
    }

    pub fn occupy(&mut self, slot: usize, voice: V) {
        if let Some(v) = self.voices.get_mut(slot) {
            *v = Some(voice);
        }
    }

    pub fn busy(&self) -> usize {
        self.voices.iter().filter(|v| v.is_some()).count()
    }
}

#[derive(Resource, Debug)]
struct Mixer(ChannelMixer<Entity>);

#[derive(Resource, Debug, Clone)]
pub struct SoundHandles {
    pub player_fire: Handle<AudioSource>,
    pub player_die: Handle<AudioSource>,
    pub alien_die: Handle<AudioSource>,
}

impl SoundHandles {
    fn get(&self, effect: SoundEffect) -> Handle<AudioSource> {
        match effect {
            SoundEffect::PlayerFire => self.player_fire.clone(),
            SoundEffect::PlayerDie => self.player_die.clone(),
            SoundEffect::AlienDie => self.alien_die.clone(),
        }
    }
}

/// Message storage. Safe for headless apps.
pub fn plugin(app: &mut App) {
    app.add_message::<PlaySound>();
}

/// Audio output (requires the asset server and Bevy's audio plugin).
pub fn output_plugin(app: &mut App) {
    let channels = app.world().resource::<Tunables>().sound_channels;
    app.insert_resource(Mixer(ChannelMixer::new(channels)))
        .add_systems(PreStartup, load_sounds)
        .add_systems(OnEnter(GameState::InGame), start_music)
        .add_systems(PostUpdate, play_sounds);
}

fn load_sounds(mut commands: Commands, assets: Res<AssetServer>, tunables: Res<Tunables>) {
    let paths = &tunables.assets;
    commands.insert_resource(SoundHandles {
        player_fire: assets.load(paths.fire_sound.clone()),
        player_die: assets.load(paths.player_die_sound.clone()),
        alien_die: assets.load(paths.alien_die_sound.clone()),
    });
}

fn start_music(mut commands: Commands, assets: Res<AssetServer>, tunables: Res<Tunables>) {
    commands.spawn((
        Name::new("Music"),
        AudioPlayer::new(assets.load(tunables.assets.music.clone())),
        PlaybackSettings::LOOP,
        DespawnOnExit(GameState::InGame),
    ));
}

fn play_sounds(
    mut commands: Commands,
    mut reader: MessageReader<PlaySound>,
    sounds: Res<SoundHandles>,
    mut mixer: ResMut<Mixer>,
    q_voices: Query<(), With<AudioPlayer>>,
) {
    mixer.0.release_finished(|e| q_voices.contains(e));

    for req in reader.read() {
        let Some(assignment) = mixer.0.assign(req.channel) else {
            debug!("no free channel for {:?}", req.effect);
            continue;
        };

        if let Some(old) = assignment.evicted {
            if q_voices.contains(old) {
                commands.entity(old).despawn();
            }
        }

        let voice = commands
            .spawn((AudioPlayer::new(sounds.get(req.effect)), PlaybackSettings::DESPAWN))
            .id();
        mixer.0.occupy(assignment.slot, voice);
    }
}

#[cfg(test)]
mod tests;
