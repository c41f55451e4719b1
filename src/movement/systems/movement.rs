//! Movement domain: per-frame lean, charge, launch and landing systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    GroundContact, GroundTransition, Player, PogoLanded, PogoLaunched, PogoState, PogoTuning,
};

pub(crate) fn update_lean(
    time: Res<Time>,
    tuning: Res<PogoTuning>,
    mut query: Query<(&mut PogoState, &mut Rotation), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut rotation) in &mut query {
        if state.tick_lean(dt, &tuning) {
            // Orientation is rebuilt from the angle every frame, never accumulated
            *rotation = Rotation::degrees(-state.lean_angle);
        }
    }
}

pub(crate) fn accumulate_charge(
    time: Res<Time>,
    tuning: Res<PogoTuning>,
    mut query: Query<&mut PogoState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.tick_charge(dt, &tuning);
    }
}

pub(crate) fn apply_launch_impulses(
    mut launches: MessageReader<PogoLaunched>,
    mut bodies: Query<Forces, With<Player>>,
) {
    for launch in launches.read() {
        let Ok(mut forces) = bodies.get_mut(launch.entity) else {
            continue;
        };
        forces.apply_linear_impulse(launch.impulse);
    }
}

pub(crate) fn reset_momentum_on_landing(
    mut landings: MessageWriter<PogoLanded>,
    mut query: Query<(Entity, &mut PogoState, &GroundContact, &mut LinearVelocity), With<Player>>,
) {
    for (entity, mut state, contact, mut velocity) in &mut query {
        match state.observe_ground(contact.grounded) {
            GroundTransition::Landed => {
                debug!(
                    "Landed: cancelling velocity ({:.1}, {:.1})",
                    velocity.x, velocity.y
                );
                velocity.0 = Vec2::ZERO;
                landings.write(PogoLanded { entity });
            }
            GroundTransition::LeftGround => {
                debug!(
                    "Left ground: phase={:?}, charge={:.2}",
                    state.phase(),
                    state.charge
                );
            }
            GroundTransition::None => {}
        }
    }
}
