//! Shared vocabulary for the tessera workspace: pattern tags, cell status,
//! face directions and the 24 cube rotations.

pub mod constants;
pub mod direction;
pub mod math;
pub mod rotation;
pub mod types;

pub use direction::{Axis, Direction};
pub use rotation::CubeRotation;
pub use types::{PatternType, VoxelIndex, VoxelStatus};
