use glam::Vec3;
use tessera_core::{Direction, VoxelIndex, VoxelStatus};

/// One cell of the grid.
#[derive(Debug, Clone)]
pub struct Voxel {
    /// Absolute index in voxel-space.
    pub index: VoxelIndex,
    /// Current occupancy state.
    pub status: VoxelStatus,
    /// Connection directions written by the block that claimed this cell.
    pub directions: Vec<Direction>,
    /// Grouping colour of the owning block. None until a block paints it.
    pub color: Option<Vec3>,
    /// World-space centre of the cell.
    pub centre: Vec3,
}

impl Voxel {
    /// Create a free cell at `index` with the given world centre.
    pub fn new(index: VoxelIndex, centre: Vec3) -> Self {
        Self {
            index,
            status: VoxelStatus::Available,
            directions: Vec::new(),
            color: None,
            centre,
        }
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = Some(color);
    }

    /// Cells this voxel's directions point at.
    pub fn connection_targets(&self) -> impl Iterator<Item = VoxelIndex> + '_ {
        self.directions.iter().map(move |d| self.index + d.offset())
    }
}
