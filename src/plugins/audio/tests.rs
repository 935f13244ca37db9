use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;

#[test]
fn player_channel_always_uses_reserved_slot_and_evicts() {
    let mut mixer = ChannelMixer::<u32>::new(6);

    let first = mixer.assign(Channel::Player).unwrap();
    assert_eq!(first, Assignment { slot: 0, evicted: None });
    mixer.occupy(first.slot, 10);

    let second = mixer.assign(Channel::Player).unwrap();
    assert_eq!(second, Assignment { slot: 0, evicted: Some(10) });
}

#[test]
fn any_channel_takes_first_free_slot() {
    let mut mixer = ChannelMixer::<u32>::new(3);
    mixer.occupy(0, 1);

    let a = mixer.assign(Channel::Any).unwrap();
    assert_eq!(a.slot, 1);
    mixer.occupy(a.slot, 2);

    let b = mixer.assign(Channel::Any).unwrap();
    assert_eq!(b.slot, 2);
    mixer.occupy(b.slot, 3);

    assert_eq!(mixer.assign(Channel::Any), None);
    assert_eq!(mixer.busy(), 3);
}

#[test]
fn finished_voices_free_their_slots() {
    let mut mixer = ChannelMixer::<u32>::new(2);
    mixer.occupy(0, 1);
    mixer.occupy(1, 2);
    assert_eq!(mixer.assign(Channel::Any), None);

    mixer.release_finished(|v| v != 2);

    assert_eq!(mixer.busy(), 1);
    assert_eq!(mixer.assign(Channel::Any).map(|a| a.slot), Some(1));
}

#[test]
fn plugin_registers_message_storage() {
    let mut app = App::new();
    plugin(&mut app);
    assert!(app.world().get_resource::<Messages<PlaySound>>().is_some());
}

#[test]
fn written_sounds_are_readable() {
    let mut world = World::new();
    world.init_resource::<Messages<PlaySound>>();
    world.write_message(PlaySound::new(SoundEffect::AlienDie, Channel::Any));

    let read = run_system_once(&mut world, |mut reader: MessageReader<PlaySound>| {
        reader.read().copied().collect::<Vec<_>>()
    });
    assert_eq!(read, vec![PlaySound::new(SoundEffect::AlienDie, Channel::Any)]);
}
