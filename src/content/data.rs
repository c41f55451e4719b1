//! Data definitions for RON content files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Current tuning file schema.
pub const TUNING_SCHEMA_VERSION: u32 = 1;

/// Pogo controller tuning as authored in `pogo_tuning.ron`.
///
/// Lengths, impulses and gravity are in world units; `pixels_per_unit`
/// converts them when the runtime tuning is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct PogoTuningDef {
    pub schema_version: u32,
    pub charge_speed: f32,
    pub max_charge: f32,
    pub jump_force: f32,
    pub lean_speed: f32,
    pub lean_return_speed: f32,
    pub max_lean_angle: f32,
    pub ground_radius: f32,
    #[serde(default = "default_body_mass")]
    pub body_mass: f32,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
}

fn default_body_mass() -> f32 {
    10.0
}

fn default_gravity() -> f32 {
    9.81
}

fn default_pixels_per_unit() -> f32 {
    32.0
}

impl Default for PogoTuningDef {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            charge_speed: 5.0,
            max_charge: 10.0,
            jump_force: 15.0,
            lean_speed: 90.0,
            lean_return_speed: 45.0,
            max_lean_angle: 30.0,
            ground_radius: 0.1,
            body_mass: default_body_mass(),
            gravity: default_gravity(),
            pixels_per_unit: default_pixels_per_unit(),
        }
    }
}
