use bevy::prelude::*;

fn main() -> AppExit {
    bevy_shooter::game::run()
}
