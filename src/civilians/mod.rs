//! Civilians domain: ambient pedestrians the pogo can land on.

mod components;
mod systems;

pub use components::*;

use bevy::prelude::*;

use crate::civilians::systems::{spawn_civilians, tint_on_player_contact, wander_civilians};

pub struct CiviliansPlugin;

impl Plugin for CiviliansPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_civilians)
            .add_systems(Update, (wander_civilians, tint_on_player_contact));
    }
}
