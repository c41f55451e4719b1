//! Movement domain: frame-step rules for leaning, charging and landing.
//!
//! Everything here is plain data manipulation on [`PogoState`]; the systems
//! feed it frame time, the fresh ground query and queued input, then push
//! the results into the physics components.

use bevy::prelude::*;

use crate::movement::{Facing, PogoState, PogoTuning};

/// Negative and non-finite frame times count as no time passing.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// What a charge release turned into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChargeRelease {
    /// Released without a qualifying charge start.
    Ignored,
    /// Released in the air; the stored charge was dropped.
    Discarded { charge: f32 },
    Launched { impulse: Vec2 },
}

/// Ground change observed between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    None,
    Landed,
    LeftGround,
}

/// Impulse for a jump with the given charge, lean and body orientation.
///
/// The direction is the body's local up tilted toward its local right by
/// `lean_angle / max_lean_angle`, so a full lean points along the diagonal.
pub fn launch_impulse(
    charge: f32,
    lean_angle: f32,
    orientation: Rot2,
    tuning: &PogoTuning,
) -> Vec2 {
    let lean_direction = if tuning.max_lean_angle > 0.0 {
        (lean_angle / tuning.max_lean_angle).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let up = orientation * Vec2::Y;
    let right = orientation * Vec2::X;
    let direction = (up + right * lean_direction).normalize_or_zero();
    direction * charge * tuning.jump_force
}

impl PogoState {
    pub fn set_lean_left(&mut self, held: bool) {
        self.is_leaning_left = held;
    }

    pub fn set_lean_right(&mut self, held: bool) {
        self.is_leaning_right = held;
    }

    /// Start charging if grounded. Returns whether charging began.
    pub fn begin_charge(&mut self, grounded: bool) -> bool {
        if grounded {
            self.is_charging = true;
        }
        grounded
    }

    /// End a charge and launch from the ground.
    ///
    /// Charge is reset by every qualifying release, including one made in
    /// the air, which launches nothing.
    pub fn release_charge(&mut self, grounded: bool, tuning: &PogoTuning) -> ChargeRelease {
        if !self.is_charging {
            return ChargeRelease::Ignored;
        }
        self.is_charging = false;

        let charge = std::mem::take(&mut self.charge);
        if !grounded {
            return ChargeRelease::Discarded { charge };
        }

        let impulse = launch_impulse(charge, self.lean_angle, self.orientation(), tuning);
        ChargeRelease::Launched { impulse }
    }

    /// Body orientation for the current lean.
    pub fn orientation(&self) -> Rot2 {
        Rot2::degrees(-self.lean_angle)
    }

    /// Advance the lean angle and facing by `dt` seconds.
    ///
    /// Returns false when nothing moved (zero time, or both lean inputs held)
    /// so the caller can leave the body orientation untouched.
    pub fn tick_lean(&mut self, dt: f32, tuning: &PogoTuning) -> bool {
        let dt = sanitize_dt(dt);
        if dt == 0.0 {
            return false;
        }

        let max = tuning.max_lean_angle;
        match (self.is_leaning_left, self.is_leaning_right) {
            // Opposite inputs hold the current lean.
            (true, true) => return false,
            (true, false) => {
                self.facing = Facing::Left;
                self.lean_angle = (self.lean_angle - tuning.lean_speed * dt).clamp(-max, max);
            }
            (false, true) => {
                self.facing = Facing::Right;
                self.lean_angle = (self.lean_angle + tuning.lean_speed * dt).clamp(-max, max);
            }
            (false, false) => {
                self.facing = Facing::Up;
                self.lean_angle = move_towards(self.lean_angle, 0.0, tuning.lean_return_speed * dt);
            }
        }
        true
    }

    /// Accumulate charge while charging, capped at `max_charge`.
    /// Grounding is only checked when the charge starts.
    pub fn tick_charge(&mut self, dt: f32, tuning: &PogoTuning) {
        if !self.is_charging {
            return;
        }
        let dt = sanitize_dt(dt);
        self.charge = (self.charge + tuning.charge_speed * dt).min(tuning.max_charge);
    }

    /// Record this frame's ground state and report the edge, if any.
    pub fn observe_ground(&mut self, grounded: bool) -> GroundTransition {
        let transition = match (self.was_grounded, grounded) {
            (false, true) => GroundTransition::Landed,
            (true, false) => GroundTransition::LeftGround,
            _ => GroundTransition::None,
        };
        self.was_grounded = grounded;
        transition
    }
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
