use crate::error::PlacementError;
use crate::placement::{MappedVoxel, Placement};
use crate::state::{classify, BlockState};
use crate::visual::VisualFactory;
use tessera_core::math::block_color;
use tessera_core::{CubeRotation, Direction, PatternType, VoxelIndex, VoxelStatus};
use tessera_grid::VoxelSpace;
use tessera_patterns::{Pattern, PatternCatalog};

/// One attempt to place a pattern on the grid.
///
/// A block borrows its pattern from the catalog and references grid cells by
/// index only; the grid stays the owner of every cell. The footprint is
/// recomputed whenever the anchor or rotation changes, and the state is
/// derived from the grid on every read.
///
/// Blocks whose footprints can overlap must be checked and activated one at a
/// time: read [`Block::state`], then [`Block::activate`], before moving on to
/// the next block.
#[derive(Debug)]
pub struct Block<'c, H> {
    pattern: &'c Pattern,
    anchor: VoxelIndex,
    rotation: CubeRotation,
    placement: Placement,
    placed: bool,
    visual: Option<H>,
}

impl<'c, H> Block<'c, H> {
    /// Build a block for `pattern_type` and compute its footprint.
    pub fn new<G: VoxelSpace>(
        catalog: &'c PatternCatalog,
        pattern_type: PatternType,
        anchor: VoxelIndex,
        rotation: CubeRotation,
        grid: &G,
    ) -> Result<Self, PlacementError> {
        let pattern = catalog.lookup(pattern_type)?;
        let mut block = Self {
            pattern,
            anchor,
            rotation,
            placement: Placement::default(),
            placed: false,
            visual: None,
        };
        block.reposition(grid);
        Ok(block)
    }

    /// Recompute the footprint from the current anchor and rotation.
    pub fn reposition<G: VoxelSpace>(&mut self, grid: &G) {
        self.placement = Placement::compute(self.pattern, self.anchor, self.rotation, grid);
        if !self.placement.dropped().is_empty() {
            log::debug!(
                "{} at {} dropped {} voxel(s) outside the grid",
                self.pattern.pattern_type(),
                self.anchor,
                self.placement.dropped().len()
            );
        }
    }

    pub fn set_anchor<G: VoxelSpace>(&mut self, anchor: VoxelIndex, grid: &G) {
        self.anchor = anchor;
        self.reposition(grid);
    }

    pub fn set_rotation<G: VoxelSpace>(&mut self, rotation: CubeRotation, grid: &G) {
        self.rotation = rotation;
        self.reposition(grid);
    }

    pub fn set_pose<G: VoxelSpace>(
        &mut self,
        anchor: VoxelIndex,
        rotation: CubeRotation,
        grid: &G,
    ) {
        self.anchor = anchor;
        self.rotation = rotation;
        self.reposition(grid);
    }

    /// Current placement state against `grid`.
    pub fn state<G: VoxelSpace>(&self, grid: &G) -> BlockState {
        classify(self.placed, self.pattern.len(), &self.placement, grid)
    }

    /// Commit the block to the grid.
    ///
    /// The state is checked once up front; a block that is not `Valid` leaves
    /// the grid untouched. On success every target cell receives its rotated
    /// directions, becomes `Connection` if one of them leads to a free cell
    /// and `Alive` otherwise, and is painted with the block colour.
    pub fn activate<G, F>(&mut self, grid: &mut G, visuals: &mut F) -> Result<(), PlacementError>
    where
        G: VoxelSpace,
        F: VisualFactory<Handle = H>,
    {
        let state = self.state(&*grid);
        if state != BlockState::Valid {
            log::warn!(
                "{} at {} can't be placed: {state}",
                self.pattern.pattern_type(),
                self.anchor
            );
            return Err(PlacementError::NotPlaceable { state });
        }

        let color = block_color(self.anchor, self.rotation.index() as u32);
        for mapped in self.placement.mapped() {
            if let Some(voxel) = grid.voxel_mut(mapped.index) {
                voxel.directions = mapped.directions.clone();
                voxel.status = VoxelStatus::Alive;
                voxel.set_color(color);
            }
        }
        // Classify after every cell is claimed so the block's own cells never count as open.
        let open: Vec<VoxelIndex> = self
            .placement
            .cells()
            .filter(|index| grid.has_open_connection(*index))
            .collect();
        for index in &open {
            if let Some(voxel) = grid.voxel_mut(*index) {
                voxel.status = VoxelStatus::Connection;
            }
        }

        let position = grid.centre(self.anchor);
        self.visual = Some(visuals.create(self.pattern.pattern_type(), position, self.rotation));
        self.placed = true;
        log::debug!(
            "Placed {} at {} ({} cells, {} open)",
            self.pattern.pattern_type(),
            self.anchor,
            self.placement.len(),
            open.len()
        );
        Ok(())
    }

    /// Return every target cell to `Available`.
    ///
    /// The placed flag and the visual handle are kept.
    pub fn deactivate<G: VoxelSpace>(&self, grid: &mut G) {
        for index in self.placement.cells() {
            if let Some(voxel) = grid.voxel_mut(index) {
                voxel.status = VoxelStatus::Available;
            }
        }
    }

    /// Remove the block: vacate its cells and release its visual, if any.
    pub fn destroy<G, F>(&mut self, grid: &mut G, visuals: &mut F)
    where
        G: VoxelSpace,
        F: VisualFactory<Handle = H>,
    {
        self.deactivate(grid);
        if let Some(handle) = self.visual.take() {
            visuals.release(handle);
        }
    }

    pub fn pattern_type(&self) -> PatternType {
        self.pattern.pattern_type()
    }

    pub fn anchor(&self) -> VoxelIndex {
        self.anchor
    }

    pub fn rotation(&self) -> CubeRotation {
        self.rotation
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Mapped cells in pattern order.
    pub fn voxels(&self) -> &[MappedVoxel] {
        self.placement.mapped()
    }

    /// Pattern offsets that fell outside the grid at the current pose.
    pub fn dropped(&self) -> &[usize] {
        self.placement.dropped()
    }

    /// Rotated directions for one target cell.
    pub fn rotated_directions(&self, index: VoxelIndex) -> Option<&[Direction]> {
        self.placement.get(index).map(|m| m.directions.as_slice())
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    pub fn visual(&self) -> Option<&H> {
        self.visual.as_ref()
    }
}
