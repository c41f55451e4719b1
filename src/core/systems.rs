//! Core domain: camera setup and tracking.

use bevy::prelude::*;

use crate::movement::Player;

/// How quickly the camera closes the gap to the player, per second.
const CAMERA_FOLLOW_RATE: f32 = 4.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Ease the camera horizontally toward the player.
pub(crate) fn follow_player(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let blend = (CAMERA_FOLLOW_RATE * time.delta_secs()).clamp(0.0, 1.0);

    for mut camera in &mut cameras {
        camera.translation.x += (player.translation.x - camera.translation.x) * blend;
    }
}

