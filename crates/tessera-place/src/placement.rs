use tessera_core::constants::JOIN_OFFSET;
use tessera_core::{CubeRotation, Direction, VoxelIndex};
use tessera_grid::{Orient, VoxelSpace};
use tessera_patterns::Pattern;

/// A pattern voxel resolved to a grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedVoxel {
    /// Position of the source voxel in the pattern's voxel list.
    pub offset_index: usize,
    /// Absolute grid cell.
    pub index: VoxelIndex,
    /// The source voxel's directions, rotated with the block.
    pub directions: Vec<Direction>,
}

/// Oriented footprint of a block: which pattern voxels landed where, and
/// which ones fell outside the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    mapped: Vec<MappedVoxel>,
    dropped: Vec<usize>,
}

impl Placement {
    /// Resolve every voxel of `pattern` at `anchor` under `rotation`.
    ///
    /// Voxels outside the grid are left out of the mapping and listed in
    /// [`Placement::dropped`] instead; no error is raised here.
    pub fn compute<G: VoxelSpace>(
        pattern: &Pattern,
        anchor: VoxelIndex,
        rotation: CubeRotation,
        grid: &G,
    ) -> Self {
        let mut mapped = Vec::with_capacity(pattern.len());
        let mut dropped = Vec::new();
        for (offset_index, voxel) in pattern.voxels().iter().enumerate() {
            match grid.orient(voxel.index, anchor, rotation) {
                Orient::Mapped(index) => mapped.push(MappedVoxel {
                    offset_index,
                    index,
                    directions: voxel
                        .directions
                        .iter()
                        .map(|d| rotation.rotate_direction(*d))
                        .collect(),
                }),
                Orient::OutOfBounds => dropped.push(offset_index),
            }
        }
        Self { mapped, dropped }
    }

    /// Mapped voxels in pattern order.
    pub fn mapped(&self) -> &[MappedVoxel] {
        &self.mapped
    }

    /// Pattern offsets that fell outside the grid.
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    /// Number of mapped cells.
    pub fn len(&self) -> usize {
        self.mapped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapped.is_empty()
    }

    /// The cell the join voxel landed on, if it is inside the grid.
    pub fn join(&self) -> Option<&MappedVoxel> {
        self.mapped.iter().find(|m| m.offset_index == JOIN_OFFSET)
    }

    pub fn get(&self, index: VoxelIndex) -> Option<&MappedVoxel> {
        self.mapped.iter().find(|m| m.index == index)
    }

    pub fn cells(&self) -> impl Iterator<Item = VoxelIndex> + '_ {
        self.mapped.iter().map(|m| m.index)
    }
}
