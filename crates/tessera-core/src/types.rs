use glam::IVec3;
use std::fmt;

/// Absolute cell index in voxel-space.
pub type VoxelIndex = IVec3;

/// Newtype for pattern type tags. Each tag maps to at most one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternType(pub u16);

impl PatternType {
    /// The built-in nine voxel column.
    pub const B: PatternType = PatternType(1);
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PatternType::B => write!(f, "PatternB"),
            PatternType(id) => write!(f, "Pattern#{id}"),
        }
    }
}

/// Occupancy state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VoxelStatus {
    /// Blocked by something outside the placement system (terrain, no-build zone).
    Dead = 0,
    /// Free to be claimed by a block.
    #[default]
    Available = 1,
    /// Claimed by a placed block and offering at least one open connection.
    Connection = 2,
    /// Claimed by a placed block with no open connection left.
    Alive = 3,
}

impl VoxelStatus {
    /// Whether a block may claim this cell during placement.
    pub fn is_free(self) -> bool {
        matches!(self, VoxelStatus::Available | VoxelStatus::Connection)
    }
}
