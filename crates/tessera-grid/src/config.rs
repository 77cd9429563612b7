use crate::error::ConfigError;
use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};
use tessera_core::constants::{
    DEFAULT_GRID_X, DEFAULT_GRID_Y, DEFAULT_GRID_Z, DEFAULT_VOXEL_SIZE, MAX_GRID_CELLS,
};

/// Grid dimensions and world placement, parsed from RON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Cell count along x, y and z.
    pub size: (u32, u32, u32),
    /// Edge length of one cell in world units.
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,
    /// World position of the centre of cell (0,0,0).
    #[serde(default)]
    pub origin: (f32, f32, f32),
}

fn default_voxel_size() -> f32 {
    DEFAULT_VOXEL_SIZE
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: (DEFAULT_GRID_X, DEFAULT_GRID_Y, DEFAULT_GRID_Z),
            voxel_size: DEFAULT_VOXEL_SIZE,
            origin: (0.0, 0.0, 0.0),
        }
    }
}

impl GridConfig {
    pub fn size(&self) -> UVec3 {
        UVec3::new(self.size.0, self.size.1, self.size.2)
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::new(self.origin.0, self.origin.1, self.origin.2)
    }

    /// Check dimensions, total cell count and voxel size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (x, y, z) = self.size;
        if x == 0 || y == 0 || z == 0 {
            return Err(ConfigError::InvalidSize { x, y, z });
        }
        let cells = (x as usize)
            .checked_mul(y as usize)
            .and_then(|n| n.checked_mul(z as usize));
        if cells.map_or(true, |n| n > MAX_GRID_CELLS) {
            return Err(ConfigError::TooManyCells {
                x,
                y,
                z,
                limit: MAX_GRID_CELLS,
            });
        }
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(ConfigError::InvalidVoxelSize(self.voxel_size));
        }
        Ok(())
    }
}

/// Parse and validate a grid config from a RON string.
pub fn load_grid_config(ron_str: &str) -> Result<GridConfig, ConfigError> {
    let options = ron::Options::default();
    let config: GridConfig = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    log::debug!(
        "Loaded grid config {}x{}x{} (voxel size {})",
        config.size.0,
        config.size.1,
        config.size.2,
        config.voxel_size
    );
    Ok(config)
}
