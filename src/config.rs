use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::hex::Bounds;
use crate::navigation::HexLayout;

/// Grid configuration, supplied once at startup.
///
/// Every field has a default, so a partial TOML file (or none at all) is
/// fine. The default radius of 1 gives the flower layout: a center cell plus
/// one ring, 7 slots per floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Linear size of a hex cell, in world units.
    pub hex_size: f32,

    /// Vertical spacing between floors, in world units.
    pub floor_height: f32,

    /// Inclusive bound on axial distance from the origin.
    pub max_hex_radius: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            hex_size: 1000.0,
            floor_height: 500.0,
            max_hex_radius: 1,
        }
    }
}

impl GridConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        toml::from_str(&data).map_err(Into::into)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::ser::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    /// The radial bound this configuration implies.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.max_hex_radius)
    }

    /// The world-space metrics this configuration implies.
    pub fn layout(&self) -> HexLayout {
        HexLayout {
            hex_size: self.hex_size,
            floor_height: self.floor_height,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
}
