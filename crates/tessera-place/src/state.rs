use crate::placement::Placement;
use std::fmt;
use tessera_core::VoxelStatus;
use tessera_grid::VoxelSpace;

/// Placement state of a block, derived from the grid on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockState {
    /// Fully inside the grid and free to commit.
    Valid = 0,
    /// At least one target cell is taken.
    Intersecting = 1,
    /// At least one pattern voxel falls outside the grid.
    OutOfBounds = 2,
    /// Committed to the grid. Terminal.
    Placed = 3,
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockState::Valid => "valid",
            BlockState::Intersecting => "intersecting",
            BlockState::OutOfBounds => "out of bounds",
            BlockState::Placed => "placed",
        };
        f.write_str(name)
    }
}

/// Classify a block footprint against the current grid.
///
/// Checks run in order: placed, out of bounds, intersecting, valid. A block
/// whose join cell is an open connection counts as valid even when other
/// target cells are taken, which is how new blocks graft onto placed ones.
pub fn classify<G: VoxelSpace>(
    placed: bool,
    pattern_len: usize,
    placement: &Placement,
    grid: &G,
) -> BlockState {
    if placed {
        return BlockState::Placed;
    }
    if placement.len() < pattern_len {
        return BlockState::OutOfBounds;
    }
    let blocked = placement
        .cells()
        .any(|index| !grid.status(index).is_some_and(VoxelStatus::is_free));
    if blocked {
        let join_status = placement.join().and_then(|j| grid.status(j.index));
        if join_status == Some(VoxelStatus::Connection) {
            return BlockState::Valid;
        }
        return BlockState::Intersecting;
    }
    BlockState::Valid
}
