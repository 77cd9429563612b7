//! Single source of truth for shared constants.

/// Number of proper rotations of a cube (rotations mapping the grid onto itself).
pub const ROTATION_COUNT: usize = 24;

/// Default grid width (x) in voxels.
pub const DEFAULT_GRID_X: u32 = 20;

/// Default grid height (y) in voxels.
pub const DEFAULT_GRID_Y: u32 = 40;

/// Default grid depth (z) in voxels.
pub const DEFAULT_GRID_Z: u32 = 20;

/// Default edge length of one voxel in world units.
pub const DEFAULT_VOXEL_SIZE: f32 = 1.0;

/// Offset index of the join voxel inside every pattern.
pub const JOIN_OFFSET: usize = 0;

/// Lower bound for each channel of a generated block colour, keeps blocks off black.
pub const BLOCK_COLOR_MIN: f32 = 0.2;

/// Upper bound for each channel of a generated block colour.
pub const BLOCK_COLOR_MAX: f32 = 0.95;

/// Largest grid a config may ask for, in cells.
pub const MAX_GRID_CELLS: usize = 1 << 22;
