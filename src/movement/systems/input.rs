//! Movement domain: input sampling and latch updates.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    ActionPhase, ChargeRelease, GroundContact, Player, PogoAction, PogoBindings, PogoInput,
    PogoLaunched, PogoState, PogoTuning,
};

/// Turn keyboard edges into pogo input messages.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<PogoBindings>,
    mut inputs: MessageWriter<PogoInput>,
) {
    let actions = [
        (PogoAction::LeanLeft, &bindings.lean_left),
        (PogoAction::LeanRight, &bindings.lean_right),
        (PogoAction::Charge, &bindings.charge),
    ];

    for (action, keys) in actions {
        for &phase in action_phases(&keyboard, keys) {
            inputs.write(PogoInput { action, phase });
        }
    }
}

/// An action starts when its first bound key goes down and is canceled when
/// its last bound key comes up. A key pressed and released within one frame
/// yields both edges, in order.
pub(crate) fn action_phases(
    keyboard: &ButtonInput<KeyCode>,
    keys: &[KeyCode],
) -> &'static [ActionPhase] {
    let held_before = keys.iter().any(|key| {
        (keyboard.pressed(*key) || keyboard.just_released(*key)) && !keyboard.just_pressed(*key)
    });
    let held_now = keyboard.any_pressed(keys.iter().copied());
    let tapped = keyboard.any_just_pressed(keys.iter().copied());

    match (held_before, held_now) {
        (false, true) => &[ActionPhase::Started],
        (true, false) => &[ActionPhase::Canceled],
        (false, false) if tapped => &[ActionPhase::Started, ActionPhase::Canceled],
        _ => &[],
    }
}

/// Drain queued input into the latches. Charge releases that launch are
/// forwarded as [`PogoLaunched`] for the physics step.
pub(crate) fn apply_input(
    mut inputs: MessageReader<PogoInput>,
    mut launches: MessageWriter<PogoLaunched>,
    tuning: Res<PogoTuning>,
    mut query: Query<(Entity, &mut PogoState, &GroundContact), With<Player>>,
) {
    for input in inputs.read() {
        for (entity, mut state, contact) in &mut query {
            match (input.action, input.phase) {
                (PogoAction::LeanLeft, phase) => state.set_lean_left(phase == ActionPhase::Started),
                (PogoAction::LeanRight, phase) => {
                    state.set_lean_right(phase == ActionPhase::Started)
                }
                (PogoAction::Charge, ActionPhase::Started) => {
                    if state.begin_charge(contact.grounded) {
                        debug!("Charge started");
                    } else {
                        debug!("Charge start ignored while airborne");
                    }
                }
                (PogoAction::Charge, ActionPhase::Canceled) => {
                    match state.release_charge(contact.grounded, &tuning) {
                        ChargeRelease::Ignored => {}
                        ChargeRelease::Discarded { charge } => {
                            debug!("Charge released in the air, discarded {:.2}", charge);
                        }
                        ChargeRelease::Launched { impulse } => {
                            info!(
                                "Launch: impulse=({:.1}, {:.1}), lean={:.1}",
                                impulse.x, impulse.y, state.lean_angle
                            );
                            launches.write(PogoLaunched { entity, impulse });
                        }
                    }
                }
            }
        }
    }
}
