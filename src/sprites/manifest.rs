//! Facing sprite manifest loading.
//!
//! The manifest JSON maps each facing selector to an image path relative to
//! `assets/`. Without a manifest the player is drawn as a tinted rectangle.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::movement::Facing;

/// Manifest location, relative to the working directory.
pub const MANIFEST_PATH: &str = "assets/sprites/pogo_manifest.json";

/// Raw manifest JSON structure.
#[derive(Debug, Clone, Deserialize)]
pub struct FacingManifest {
    pub version: u32,
    /// Drawn size in pixels; the body size is used when absent.
    #[serde(default)]
    pub size: Option<[f32; 2]>,
    pub facing: FacingPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacingPaths {
    pub up: String,
    pub left: String,
    pub right: String,
}

#[derive(Debug)]
pub enum ManifestError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Io(e) => write!(f, "Failed to read sprite manifest: {}", e),
            ManifestError::Parse(e) => write!(f, "Failed to parse sprite manifest: {}", e),
        }
    }
}

impl std::error::Error for ManifestError {}

pub fn parse_manifest(contents: &str) -> Result<FacingManifest, ManifestError> {
    serde_json::from_str(contents).map_err(ManifestError::Parse)
}

/// Load the manifest if one exists. A missing file is not an error.
pub fn load_manifest(path: &Path) -> Result<Option<FacingManifest>, ManifestError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path).map_err(ManifestError::Io)?;
    parse_manifest(&contents).map(Some)
}

/// Image handles for each facing.
#[derive(Debug, Clone)]
pub struct FacingImages {
    pub up: Handle<Image>,
    pub left: Handle<Image>,
    pub right: Handle<Image>,
    pub size: Option<Vec2>,
}

/// Resource holding the loaded facing sprites, if any.
#[derive(Resource, Debug, Default)]
pub struct FacingSprites {
    pub images: Option<FacingImages>,
}

impl FacingSprites {
    pub fn from_manifest(manifest: &FacingManifest, asset_server: &AssetServer) -> Self {
        Self {
            images: Some(FacingImages {
                up: asset_server.load(manifest.facing.up.clone()),
                left: asset_server.load(manifest.facing.left.clone()),
                right: asset_server.load(manifest.facing.right.clone()),
                size: manifest.size.map(Vec2::from_array),
            }),
        }
    }

    pub fn image(&self, facing: Facing) -> Option<Handle<Image>> {
        let images = self.images.as_ref()?;
        Some(match facing {
            Facing::Up => images.up.clone(),
            Facing::Left => images.left.clone(),
            Facing::Right => images.right.clone(),
        })
    }
}

/// Fallback tint per facing when no images are loaded.
pub fn facing_tint(facing: Facing) -> Color {
    match facing {
        Facing::Up => Color::srgb(0.9, 0.9, 0.9),
        Facing::Left => Color::srgb(0.55, 0.75, 1.0),
        Facing::Right => Color::srgb(1.0, 0.7, 0.5),
    }
}
