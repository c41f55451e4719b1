//! Movement domain: anchor tracking and ground detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, GroundCheck, GroundContact, Pivot, Player, PogoRig, PogoTuning,
};

/// Keep the pivot and ground check on the player's current position.
pub(crate) fn sync_anchors(
    players: Query<(&Transform, &PogoRig), With<Player>>,
    mut anchors: Query<&mut Transform, (Without<Player>, Or<(With<Pivot>, With<GroundCheck>)>)>,
) {
    for (transform, rig) in &players {
        let feet = transform.translation.truncate();
        for anchor in [rig.pivot, rig.ground_check] {
            if let Ok(mut anchor_transform) = anchors.get_mut(anchor) {
                anchor_transform.translation.x = feet.x;
                anchor_transform.translation.y = feet.y;
            }
        }
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<PogoTuning>,
    anchors: Query<&Transform, With<GroundCheck>>,
    mut query: Query<(&PogoRig, &mut GroundContact), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not civilians, the player body, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::circle(tuning.ground_radius);

    for (rig, mut contact) in &mut query {
        let Ok(anchor) = anchors.get(rig.ground_check) else {
            contact.grounded = false;
            continue;
        };

        let hits = spatial_query.shape_intersections(
            &probe,
            anchor.translation.truncate(),
            0.0,
            &ground_filter,
        );

        contact.grounded = !hits.is_empty();
    }
}
