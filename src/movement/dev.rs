//! Movement domain: debug-only drawing helpers.

use bevy::prelude::*;

use crate::movement::{
    GroundCheck, GroundContact, Player, PogoPhase, PogoRig, PogoState, PogoTuning,
};

/// Draw the ground sensor circle, coloured by controller phase.
pub(crate) fn draw_ground_check(
    mut gizmos: Gizmos,
    tuning: Res<PogoTuning>,
    players: Query<(&PogoState, &GroundContact, &PogoRig), With<Player>>,
    anchors: Query<&Transform, With<GroundCheck>>,
) {
    for (state, contact, rig) in &players {
        let Ok(anchor) = anchors.get(rig.ground_check) else {
            continue;
        };

        let color = match (state.phase(), contact.grounded) {
            (PogoPhase::Charging, _) => Color::srgb(1.0, 0.8, 0.2),
            (_, true) => Color::srgb(0.2, 1.0, 0.3),
            (_, false) => Color::srgb(1.0, 0.2, 0.2),
        };

        // Scale up tiny probes so they stay visible
        let radius = tuning.ground_radius.max(2.0);
        gizmos.circle_2d(anchor.translation.truncate(), radius, color);

        if state.is_charging {
            let fill = state.charge / tuning.max_charge.max(f32::EPSILON);
            let start = anchor.translation.truncate() + Vec2::new(-20.0, -10.0);
            gizmos.line_2d(start, start + Vec2::new(40.0 * fill, 0.0), color);
        }
    }
}
