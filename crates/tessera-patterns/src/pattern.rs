use glam::IVec3;
use tessera_core::{Direction, PatternType};

/// One cell of a pattern, relative to the pattern origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternVoxel {
    /// Offset from the pattern origin, before rotation and anchoring.
    pub index: IVec3,
    /// Directions in which this cell offers a connection once placed.
    pub directions: Vec<Direction>,
}

impl PatternVoxel {
    pub fn new(index: IVec3, directions: Vec<Direction>) -> Self {
        Self { index, directions }
    }

    /// A cell offering no connections.
    pub fn solid(index: IVec3) -> Self {
        Self::new(index, Vec::new())
    }
}

/// Immutable geometric template for a block.
///
/// Only [`crate::PatternCatalog`] builds these, after checking that the first
/// voxel sits on the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pattern_type: PatternType,
    voxels: Vec<PatternVoxel>,
}

impl Pattern {
    pub(crate) fn new(pattern_type: PatternType, voxels: Vec<PatternVoxel>) -> Self {
        Self {
            pattern_type,
            voxels,
        }
    }

    pub fn pattern_type(&self) -> PatternType {
        self.pattern_type
    }

    /// Voxels in definition order. The first one is the join voxel, through
    /// which the pattern grafts onto open connections.
    pub fn voxels(&self) -> &[PatternVoxel] {
        &self.voxels
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Always false for catalog patterns.
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }
}
