//! Sprites module: swaps the player's sprite to match its facing.

pub mod manifest;

use bevy::prelude::*;
use std::collections::HashMap;
use std::path::Path;

pub use manifest::*;

use crate::movement::{Facing, Player, PogoRig, PogoState, PogoStep};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FacingSprites>()
            .add_systems(Startup, load_facing_sprites)
            .add_systems(Update, apply_facing_sprite.after(PogoStep));
    }
}

/// System to load the facing manifest at startup.
fn load_facing_sprites(mut sprites: ResMut<FacingSprites>, asset_server: Res<AssetServer>) {
    match load_manifest(Path::new(MANIFEST_PATH)) {
        Ok(Some(manifest)) => {
            *sprites = FacingSprites::from_manifest(&manifest, &asset_server);
            info!("Loaded facing sprite manifest v{}", manifest.version);
        }
        Ok(None) => {
            info!(
                "No sprite manifest at {}, drawing the player with facing tints",
                MANIFEST_PATH
            );
        }
        Err(e) => error!("{}", e),
    }
}

/// Push the player's facing into its body sprite whenever it changes.
pub(crate) fn apply_facing_sprite(
    facing_sprites: Res<FacingSprites>,
    players: Query<(&PogoState, &PogoRig), With<Player>>,
    mut bodies: Query<&mut Sprite>,
    mut shown: Local<HashMap<Entity, Facing>>,
) {
    for (state, rig) in &players {
        if shown.get(&rig.body) == Some(&state.facing) {
            continue;
        }
        let Ok(mut sprite) = bodies.get_mut(rig.body) else {
            continue;
        };

        dress_sprite(&mut sprite, state.facing, &facing_sprites);
        shown.insert(rig.body, state.facing);
    }
}

fn dress_sprite(sprite: &mut Sprite, facing: Facing, facing_sprites: &FacingSprites) {
    match facing_sprites.image(facing) {
        Some(image) => {
            sprite.image = image;
            sprite.color = Color::WHITE;
            if let Some(size) = facing_sprites.images.as_ref().and_then(|i| i.size) {
                sprite.custom_size = Some(size);
            }
        }
        None => sprite.color = facing_tint(facing),
    }
}
