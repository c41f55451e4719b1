//! Civilians domain: spawning, wandering and contact tint systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::civilians::{Civilian, CivilianWander, SPEED_RANGE, STOP_CHANCE};
use crate::core::GameRng;
use crate::movement::{FLOOR_TOP, GameLayer, LEVEL_HALF_WIDTH, PlayerBody, PogoTuning};

const CIVILIAN_COUNT: usize = 4;
const CIVILIAN_SIZE: Vec2 = Vec2::new(20.0, 32.0);

pub(crate) fn spawn_civilians(
    mut commands: Commands,
    tuning: Res<PogoTuning>,
    mut rng: ResMut<GameRng>,
) {
    for i in 0..CIVILIAN_COUNT {
        let speed = rng.0.random_range(SPEED_RANGE) * tuning.pixels_per_unit;
        let x = 150.0 + i as f32 * 160.0;

        commands.spawn((
            Civilian,
            CivilianWander::new(speed),
            Sprite {
                color: Color::srgb(0.85, 0.7, 0.5),
                custom_size: Some(CIVILIAN_SIZE),
                ..default()
            },
            Transform::from_xyz(x, FLOOR_TOP + CIVILIAN_SIZE.y / 2.0, 0.5),
            RigidBody::Kinematic,
            Collider::rectangle(CIVILIAN_SIZE.x, CIVILIAN_SIZE.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));

        debug!("Spawned civilian {} at x={} with speed {:.1}", i, x, speed);
    }
}

pub(crate) fn wander_civilians(
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    mut query: Query<(&mut CivilianWander, &mut Transform), With<Civilian>>,
) {
    for (mut wander, mut transform) in &mut query {
        let dx = wander.tick(time.delta(), || rng.0.random_bool(STOP_CHANCE));
        transform.translation.x += dx;

        // Walk back in from the right once off the level
        if transform.translation.x < -LEVEL_HALF_WIDTH {
            transform.translation.x = LEVEL_HALF_WIDTH;
        }
    }
}

/// Turn a civilian black the moment the player's body touches it.
pub(crate) fn tint_on_player_contact(
    mut collision_events: MessageReader<CollisionStart>,
    bodies: Query<(), With<PlayerBody>>,
    mut civilians: Query<&mut Sprite, With<Civilian>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (body, civilian) in pairs {
            if !bodies.contains(body) {
                continue;
            }
            let Ok(mut sprite) = civilians.get_mut(civilian) else {
                continue;
            };

            if sprite.color != Color::BLACK {
                sprite.color = Color::BLACK;
                info!("Civilian {:?} flattened by the pogo", civilian);
            }
        }
    }
}
