/// Errors raised while loading or validating a grid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse grid config RON: {0}")]
    Parse(String),

    #[error("grid size must be at least 1 on every axis, got {x}x{y}x{z}")]
    InvalidSize { x: u32, y: u32, z: u32 },

    #[error("grid size {x}x{y}x{z} exceeds the limit of {limit} cells")]
    TooManyCells { x: u32, y: u32, z: u32, limit: usize },

    #[error("voxel size must be finite and positive, got {0}")]
    InvalidVoxelSize(f32),
}
