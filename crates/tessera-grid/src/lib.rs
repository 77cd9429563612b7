pub mod config;
pub mod error;
pub mod grid;
pub mod space;
pub mod voxel;

pub use config::{load_grid_config, GridConfig};
pub use error::ConfigError;
pub use grid::VoxelGrid;
pub use space::{Orient, VoxelSpace};
pub use voxel::Voxel;
