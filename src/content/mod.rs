//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

pub use data::{PogoTuningDef, TUNING_SCHEMA_VERSION};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::PogoTuning;

/// Tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/pogo_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_pogo_tuning);
    }
}

/// Load, validate and install the controller tuning.
/// Any failure keeps the built-in defaults.
fn load_pogo_tuning(mut commands: Commands) {
    match tuning_from_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!(
                "Loaded pogo tuning from {}: charge_speed={}, max_charge={}, jump_force={}, max_lean={}",
                TUNING_PATH,
                tuning.charge_speed,
                tuning.max_charge,
                tuning.jump_force,
                tuning.max_lean_angle
            );
            commands.insert_resource(tuning);
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Using default pogo tuning");
            commands.insert_resource(PogoTuning::default());
        }
    }
}

/// Read a tuning file and turn it into runtime tuning, collecting every
/// problem found along the way.
pub fn tuning_from_file(path: &Path) -> Result<PogoTuning, Vec<String>> {
    let def = load_tuning(path).map_err(|e| vec![e.to_string()])?;
    tuning_from_def(&def)
}

pub fn tuning_from_def(def: &PogoTuningDef) -> Result<PogoTuning, Vec<String>> {
    let errors = validate_tuning(def);
    if errors.is_empty() {
        Ok(PogoTuning::from_def(def))
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}
