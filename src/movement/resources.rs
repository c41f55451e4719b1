//! Movement domain: tuning and input binding resources.

use bevy::prelude::*;

use crate::content::PogoTuningDef;

/// Effective controller tuning, already scaled into world (pixel) space.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PogoTuning {
    /// Charge gained per second while charging.
    pub charge_speed: f32,
    pub max_charge: f32,
    /// Impulse per unit of charge.
    pub jump_force: f32,
    /// Degrees per second while a lean input is held.
    pub lean_speed: f32,
    /// Degrees per second back toward upright with no lean input.
    pub lean_return_speed: f32,
    pub max_lean_angle: f32,
    pub ground_radius: f32,
    pub body_mass: f32,
    pub gravity: f32,
    pub pixels_per_unit: f32,
}

impl Default for PogoTuning {
    fn default() -> Self {
        Self::from_def(&PogoTuningDef::default())
    }
}

impl PogoTuning {
    /// Build the runtime tuning from its data definition.
    /// Lengths and impulses are authored in world units and scaled to pixels here.
    pub fn from_def(def: &PogoTuningDef) -> Self {
        let ppu = def.pixels_per_unit;
        Self {
            charge_speed: def.charge_speed,
            max_charge: def.max_charge,
            jump_force: def.jump_force * ppu,
            lean_speed: def.lean_speed,
            lean_return_speed: def.lean_return_speed,
            max_lean_angle: def.max_lean_angle,
            ground_radius: def.ground_radius * ppu,
            body_mass: def.body_mass,
            gravity: def.gravity * ppu,
            pixels_per_unit: ppu,
        }
    }

    /// Impulse magnitude of a fully charged jump.
    pub fn max_impulse(&self) -> f32 {
        self.max_charge * self.jump_force
    }

    /// Apex height of a fully charged, upright jump from rest.
    /// Uses h = v^2 / (2g) with v = impulse / mass.
    pub fn max_jump_height(&self) -> f32 {
        let launch_speed = self.max_impulse() / self.body_mass;
        launch_speed * launch_speed / (2.0 * self.gravity)
    }
}

/// Keyboard keys bound to each logical pogo action.
#[derive(Resource, Debug, Clone)]
pub struct PogoBindings {
    pub lean_left: Vec<KeyCode>,
    pub lean_right: Vec<KeyCode>,
    pub charge: Vec<KeyCode>,
}

impl Default for PogoBindings {
    fn default() -> Self {
        Self {
            lean_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            lean_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            charge: vec![KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp],
        }
    }
}
