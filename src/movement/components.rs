//! Movement domain: components and physics layers for pogo locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Sensors (civilians, triggers) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for the collider child that carries the player's body shape.
#[derive(Component, Debug)]
pub struct PlayerBody;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Point the ground sensor is centred on.
#[derive(Component, Debug)]
pub struct GroundCheck;

/// Foot reference point the player rotates around.
#[derive(Component, Debug)]
pub struct Pivot;

/// Entities the controller keeps glued to the player every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct PogoRig {
    pub pivot: Entity,
    pub ground_check: Entity,
    pub body: Entity,
}

/// Result of this frame's ground sensor query.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub grounded: bool,
}

/// Display selector consumed by the sprite layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Facing {
    #[default]
    Up,
    Left,
    Right,
}

/// Coarse view of the controller for logs and debug drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PogoPhase {
    Idle,
    Charging,
    Airborne,
}

/// Per-actor pogo state.
///
/// Lean and charge latches are written by input handling only; the
/// continuous fields (`lean_angle`, `charge`, `was_grounded`, `facing`) are
/// written by the per-frame systems only.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct PogoState {
    /// Degrees, positive leans right.
    pub lean_angle: f32,
    pub charge: f32,
    pub is_charging: bool,
    pub is_leaning_left: bool,
    pub is_leaning_right: bool,
    pub was_grounded: bool,
    pub facing: Facing,
}

impl PogoState {
    pub fn phase(&self) -> PogoPhase {
        if self.is_charging {
            PogoPhase::Charging
        } else if !self.was_grounded {
            PogoPhase::Airborne
        } else {
            PogoPhase::Idle
        }
    }
}
