use crate::voxel::Voxel;
use glam::{IVec3, Vec3};
use tessera_core::{CubeRotation, VoxelIndex, VoxelStatus};

/// Result of mapping a pattern offset into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    /// The offset lands on this in-bounds cell.
    Mapped(VoxelIndex),
    /// The offset falls outside the grid.
    OutOfBounds,
}

/// Coordinate transform and cell access consumed by block placement.
///
/// The implementor is the single owner of the cells. Reads go through `&self`
/// and every mutation through `&mut self`, so two blocks can never write the
/// same cells at once. Callers that place several blocks whose footprints may
/// overlap must still check a block's state and activate it before
/// considering the next one.
pub trait VoxelSpace {
    /// Whether `index` addresses a cell of this space.
    fn in_bounds(&self, index: VoxelIndex) -> bool;

    fn voxel(&self, index: VoxelIndex) -> Option<&Voxel>;

    fn voxel_mut(&mut self, index: VoxelIndex) -> Option<&mut Voxel>;

    /// World-space centre of a cell. Defined for out-of-range indices too.
    fn centre(&self, index: VoxelIndex) -> Vec3;

    /// Rotate a pattern offset about the pattern origin, then translate it to `anchor`.
    ///
    /// A target that does not fit in `i32` is out of bounds like any other.
    fn orient(&self, offset: IVec3, anchor: VoxelIndex, rotation: CubeRotation) -> Orient {
        let target = rotation.checked_rotate(offset).and_then(|step| {
            Some(IVec3::new(
                anchor.x.checked_add(step.x)?,
                anchor.y.checked_add(step.y)?,
                anchor.z.checked_add(step.z)?,
            ))
        });
        match target {
            Some(target) if self.in_bounds(target) => Orient::Mapped(target),
            _ => Orient::OutOfBounds,
        }
    }

    /// Status of a cell, None outside the space.
    fn status(&self, index: VoxelIndex) -> Option<VoxelStatus> {
        self.voxel(index).map(|v| v.status)
    }

    /// Whether any of the cell's directions points at an in-bounds `Available` neighbour.
    fn has_open_connection(&self, index: VoxelIndex) -> bool {
        let Some(voxel) = self.voxel(index) else {
            return false;
        };
        voxel
            .connection_targets()
            .any(|t| self.status(t) == Some(VoxelStatus::Available))
    }
}
