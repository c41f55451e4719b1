//! Movement domain: player, rig and level bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, Ground, GroundCheck, GroundContact, Pivot, Player, PlayerBody, PogoRig, PogoState,
    PogoTuning,
};

/// Player body size in pixels.
const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
/// Capsule radius of the body. The rounded bottom keeps the feet within a few
/// pixels of the floor at any lean.
const BODY_RADIUS: f32 = PLAYER_SIZE.x / 2.0;

/// World y of the floor's walkable surface.
pub const FLOOR_TOP: f32 = -200.0;
pub const LEVEL_HALF_WIDTH: f32 = 800.0;

const FLOOR_THICKNESS: f32 = 40.0;
const PLAYER_SPAWN: Vec3 = Vec3::new(-200.0, -150.0, 1.0);

/// How far the feet rise off flat ground when the body leans by `lean_degrees`.
pub(crate) fn feet_lift(lean_degrees: f32) -> f32 {
    BODY_RADIUS * (1.0 - lean_degrees.to_radians().cos())
}

/// Match world gravity to the tuning's unit scale.
pub(crate) fn configure_gravity(mut gravity: ResMut<Gravity>, tuning: Res<PogoTuning>) {
    gravity.0 = Vec2::NEG_Y * tuning.gravity;
}

/// Spawn the pogo player with its pivot and ground check anchors.
///
/// The player entity's origin sits at its feet; the collider and sprite are
/// carried by a child offset upward so leaning rotates around the feet.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<PogoTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let lift = feet_lift(tuning.max_lean_angle);
    if lift >= tuning.ground_radius {
        warn!(
            "Ground radius {:.2}px is smaller than the {:.2}px lift at full lean; \
             leaning jumps will read as airborne",
            tuning.ground_radius, lift
        );
    }

    let pivot = commands
        .spawn((Pivot, Transform::from_translation(PLAYER_SPAWN)))
        .id();
    let ground_check = commands
        .spawn((GroundCheck, Transform::from_translation(PLAYER_SPAWN)))
        .id();

    let body = commands
        .spawn((
            PlayerBody,
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, PLAYER_SIZE.y / 2.0, 0.0),
            Collider::capsule(BODY_RADIUS, PLAYER_SIZE.y - 2.0 * BODY_RADIUS),
            Friction::new(0.6),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ))
        .id();

    let player = commands
        .spawn((
            (
                Player,
                PogoState::default(),
                GroundContact::default(),
                PogoRig {
                    pivot,
                    ground_check,
                    body,
                },
            ),
            Transform::from_translation(PLAYER_SPAWN),
            Visibility::default(),
            (
                RigidBody::Dynamic,
                // Rotation is driven by the lean angle, not by contacts
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(tuning.body_mass),
                NoAutoMass,
            ),
        ))
        .id();
    commands.entity(player).add_child(body);

    info!(
        "Spawned pogo player: max_charge={}, jump_force={}, max_lean={}, max_jump_height={:.0}px",
        tuning.max_charge,
        tuning.jump_force,
        tuning.max_lean_angle,
        tuning.max_jump_height()
    );
}

/// Floor and a few platforms to bounce between.
pub(crate) fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Sensor]);

    let pieces = [
        // Floor
        (
            Vec2::new(0.0, FLOOR_TOP - FLOOR_THICKNESS / 2.0),
            Vec2::new(LEVEL_HALF_WIDTH * 2.0, FLOOR_THICKNESS),
            ground_color,
        ),
        // Low platform - left side
        (Vec2::new(-300.0, -60.0), Vec2::new(160.0, 20.0), platform_color),
        // Mid platform - right side
        (Vec2::new(220.0, 40.0), Vec2::new(160.0, 20.0), platform_color),
        // High platform - center
        (Vec2::new(-40.0, 180.0), Vec2::new(120.0, 20.0), platform_color),
    ];

    for (position, size, color) in pieces {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
