//! Core domain: run seed, shared RNG and camera.

mod resources;
mod systems;

pub use resources::{GameRng, RunConfig};

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};
use crate::movement::PogoStep;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let run_config = RunConfig::default();
        info!("Starting run with seed: {}", run_config.seed);

        app.insert_resource(GameRng::from_seed(run_config.seed))
            .insert_resource(run_config)
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player.after(PogoStep));
    }
}
