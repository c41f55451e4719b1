//! Movement domain: pogo stick charging, leaning, launching and landing.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
pub(crate) mod systems;

pub use bootstrap::{FLOOR_TOP, LEVEL_HALF_WIDTH};
pub use components::*;
pub use controller::{ChargeRelease, GroundTransition, launch_impulse, sanitize_dt};
pub use events::{ActionPhase, PogoAction, PogoInput, PogoLanded, PogoLaunched};
pub use resources::{PogoBindings, PogoTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::{configure_gravity, spawn_level, spawn_player};
use crate::movement::systems::{
    accumulate_charge, apply_input, apply_launch_impulses, detect_ground, read_input,
    reset_momentum_on_landing, sync_anchors, update_lean,
};

/// Ordering handle for systems that read the controller's per-frame output.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PogoStep;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PogoTuning>()
            .init_resource::<PogoBindings>()
            .add_message::<PogoInput>()
            .add_message::<PogoLaunched>()
            .add_message::<PogoLanded>()
            .add_systems(Startup, (configure_gravity, spawn_level, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    sync_anchors,
                    detect_ground,
                    apply_input,
                    update_lean,
                    accumulate_charge,
                    apply_launch_impulses,
                    reset_momentum_on_landing,
                )
                    .chain()
                    .in_set(PogoStep),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_ground_check.after(PogoStep));
    }
}
