use glam::{IVec3, Quat, Vec3};
use tessera_core::{CubeRotation, PatternType, VoxelIndex, VoxelStatus};
use tessera_grid::{VoxelGrid, VoxelSpace};
use tessera_patterns::PatternCatalog;
use tessera_place::{Block, BlockState, PlacementError, VisualFactory};

/// Opaque id handed out by [`LoggingVisuals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualId(pub u32);

/// Visual factory that only logs and counts live visuals.
#[derive(Debug, Default)]
pub struct LoggingVisuals {
    next_id: u32,
    live: usize,
}

impl LoggingVisuals {
    pub fn live(&self) -> usize {
        self.live
    }
}

impl VisualFactory for LoggingVisuals {
    type Handle = VisualId;

    fn create(
        &mut self,
        pattern_type: PatternType,
        position: Vec3,
        rotation: CubeRotation,
    ) -> VisualId {
        let id = VisualId(self.next_id);
        self.next_id += 1;
        self.live += 1;
        log::debug!(
            "visual {} for {pattern_type} at {position} facing {}",
            id.0,
            rotation.to_quat()
        );
        id
    }

    fn release(&mut self, handle: VisualId) {
        self.live = self.live.saturating_sub(1);
        log::debug!("visual {} released", handle.0);
    }
}

/// Counters collected while growing a tower.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TowerStats {
    /// Blocks committed to the grid.
    pub placed: usize,
    /// Candidate poses evaluated.
    pub attempts: usize,
    /// Candidate poses that were out of bounds.
    pub out_of_bounds: usize,
    /// Candidate poses that hit taken cells.
    pub intersecting: usize,
    /// Valid candidate poses skipped because they would overwrite a placed block.
    pub overlapping: usize,
}

/// Parse `x,y,z,w` into the cube rotation closest to that quaternion.
pub fn parse_rotation(text: &str) -> Option<CubeRotation> {
    let parts: Vec<f32> = text
        .split(',')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;
    let [x, y, z, w] = parts[..] else {
        return None;
    };
    let quat = Quat::from_xyzw(x, y, z, w);
    let length = quat.length();
    if !length.is_finite() || length == 0.0 {
        return None;
    }
    Some(CubeRotation::from_quat(quat / length))
}

/// Whether every target cell except the join is still `Available`.
///
/// The grafting rule lets a block whose join sits on an open connection
/// through even if other cells are taken; the tower only accepts clean grafts.
pub fn footprint_clear<H>(block: &Block<'_, H>, grid: &VoxelGrid) -> bool {
    block
        .voxels()
        .iter()
        .skip(1)
        .all(|m| grid.status(m.index) == Some(VoxelStatus::Available))
}

/// Grow a tower of `pattern_type` blocks.
///
/// The first block stands on the middle of the grid floor, turned by
/// `base_rotation`. Every
/// following block is grafted onto the first open connection cell that
/// accepts some rotation. Growth stops at `target` blocks or when no open
/// connection accepts a block.
pub fn grow<'c, F>(
    catalog: &'c PatternCatalog,
    pattern_type: PatternType,
    base_rotation: CubeRotation,
    grid: &mut VoxelGrid,
    visuals: &mut F,
    target: usize,
) -> Result<(Vec<Block<'c, F::Handle>>, TowerStats), PlacementError>
where
    F: VisualFactory,
{
    let mut stats = TowerStats::default();
    let mut blocks = Vec::with_capacity(target);
    if target == 0 {
        return Ok((blocks, stats));
    }

    let size = grid.size();
    let base = IVec3::new(size.x as i32 / 2, 0, size.z as i32 / 2);
    let mut first = Block::new(catalog, pattern_type, base, base_rotation, &*grid)?;
    stats.attempts += 1;
    first.activate(grid, visuals)?;
    stats.placed += 1;
    blocks.push(first);

    while blocks.len() < target {
        let candidates: Vec<VoxelIndex> = grid
            .voxels_with_status(VoxelStatus::Connection)
            .map(|v| v.index)
            .collect();
        let Some(mut block) = find_graft(catalog, pattern_type, grid, &candidates, &mut stats)?
        else {
            log::info!("No open connection accepts another block, stopping");
            break;
        };
        block.activate(grid, visuals)?;
        stats.placed += 1;
        blocks.push(block);
    }

    Ok((blocks, stats))
}

fn find_graft<'c, H>(
    catalog: &'c PatternCatalog,
    pattern_type: PatternType,
    grid: &VoxelGrid,
    candidates: &[VoxelIndex],
    stats: &mut TowerStats,
) -> Result<Option<Block<'c, H>>, PlacementError> {
    for &anchor in candidates {
        for rotation in CubeRotation::ALL {
            let block = Block::new(catalog, pattern_type, anchor, rotation, grid)?;
            stats.attempts += 1;
            match block.state(grid) {
                BlockState::Valid if footprint_clear(&block, grid) => return Ok(Some(block)),
                BlockState::Valid => stats.overlapping += 1,
                BlockState::OutOfBounds => stats.out_of_bounds += 1,
                BlockState::Intersecting => stats.intersecting += 1,
                BlockState::Placed => {}
            }
        }
    }
    Ok(None)
}

/// Destroy every block, newest first.
pub fn teardown<F: VisualFactory>(
    blocks: &mut [Block<'_, F::Handle>],
    grid: &mut VoxelGrid,
    visuals: &mut F,
) {
    for block in blocks.iter_mut().rev() {
        block.destroy(grid, visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PatternCatalog {
        PatternCatalog::with_builtins().expect("builtins register")
    }

    #[test]
    fn test_grow_places_requested_blocks() {
        let catalog = catalog();
        let mut grid = VoxelGrid::with_size(40, 40, 40).expect("valid grid size");
        let mut visuals = LoggingVisuals::default();
        let (blocks, stats) = grow(
            &catalog,
            PatternType::B,
            CubeRotation::IDENTITY,
            &mut grid,
            &mut visuals,
            4,
        )
        .expect("tower grows");

        assert_eq!(blocks.len(), 4);
        assert_eq!(stats.placed, 4);
        assert_eq!(visuals.live(), 4);
        assert!(blocks.iter().all(|b| b.is_placed()));
        assert_eq!(grid.count_status(VoxelStatus::Available), 40 * 40 * 40 - 4 * 9 + 3);
    }

    #[test]
    fn test_grow_zero_blocks_touches_nothing() {
        let catalog = catalog();
        let mut grid = VoxelGrid::with_size(10, 10, 10).expect("valid grid size");
        let mut visuals = LoggingVisuals::default();
        let (blocks, stats) = grow(
            &catalog,
            PatternType::B,
            CubeRotation::IDENTITY,
            &mut grid,
            &mut visuals,
            0,
        )
        .expect("nothing to do");
        assert!(blocks.is_empty());
        assert_eq!(stats, TowerStats::default());
        assert_eq!(grid.count_status(VoxelStatus::Available), 1000);
    }

    #[test]
    fn test_grow_fails_when_grid_too_small() {
        let catalog = catalog();
        let mut grid = VoxelGrid::with_size(5, 5, 5).expect("valid grid size");
        let mut visuals = LoggingVisuals::default();
        let result = grow(
            &catalog,
            PatternType::B,
            CubeRotation::IDENTITY,
            &mut grid,
            &mut visuals,
            2,
        );
        assert_eq!(
            result.err(),
            Some(PlacementError::NotPlaceable {
                state: BlockState::OutOfBounds
            })
        );
    }

    #[test]
    fn test_teardown_restores_grid() {
        let catalog = catalog();
        let mut grid = VoxelGrid::with_size(30, 30, 30).expect("valid grid size");
        let mut visuals = LoggingVisuals::default();
        let (mut blocks, _) = grow(
            &catalog,
            PatternType::B,
            CubeRotation::IDENTITY,
            &mut grid,
            &mut visuals,
            3,
        )
        .expect("tower grows");
        teardown(&mut blocks, &mut grid, &mut visuals);
        assert_eq!(grid.count_status(VoxelStatus::Available), 30 * 30 * 30);
        assert_eq!(visuals.live(), 0);
    }

    #[test]
    fn test_parse_rotation_snaps_to_cube_rotation() {
        assert_eq!(parse_rotation("0,0,0,1"), Some(CubeRotation::IDENTITY));
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert_eq!(
            parse_rotation(&format!("0, 0, {half}, {half}")),
            Some(CubeRotation::about_z(1))
        );
        // Unnormalised and slightly off axis still snaps.
        assert_eq!(parse_rotation("0,0.1,1,1"), Some(CubeRotation::about_z(1)));
        assert_eq!(parse_rotation("0,0,0,0"), None);
        assert_eq!(parse_rotation("1,2,3"), None);
        assert_eq!(parse_rotation("a,b,c,d"), None);
    }

    #[test]
    fn test_grow_with_turned_base() {
        let catalog = catalog();
        let mut grid = VoxelGrid::with_size(40, 40, 40).expect("valid grid size");
        let mut visuals = LoggingVisuals::default();
        let (blocks, _) = grow(
            &catalog,
            PatternType::B,
            CubeRotation::about_z(1),
            &mut grid,
            &mut visuals,
            1,
        )
        .expect("base fits");
        let base = &blocks[0];
        assert_eq!(base.rotation(), CubeRotation::about_z(1));
        // A quarter turn about +Z lays the column along -X on the floor.
        assert!(base.voxels().iter().all(|m| m.index.y == 0));
        assert_eq!(base.voxels()[8].index, IVec3::new(12, 0, 20));
    }
}
