//! Built-in pattern definitions seeded into every catalog at startup.

use crate::catalog::{CatalogError, PatternCatalog};
use crate::pattern::PatternVoxel;
use glam::IVec3;
use tessera_core::{Direction, PatternType};

/// Height of the built-in `B` column.
pub const PATTERN_B_HEIGHT: i32 = 9;

/// Nine-voxel vertical column. Every fourth level connects north/south, the
/// even levels in between connect west/east, odd levels are solid.
pub fn pattern_b() -> Vec<PatternVoxel> {
    (0..PATTERN_B_HEIGHT)
        .map(|y| {
            let directions = match y % 4 {
                0 => vec![Direction::North, Direction::South],
                2 => vec![Direction::West, Direction::East],
                _ => Vec::new(),
            };
            PatternVoxel::new(IVec3::new(0, y, 0), directions)
        })
        .collect()
}

/// Register every built-in pattern.
pub fn register_builtins(catalog: &mut PatternCatalog) -> Result<(), CatalogError> {
    catalog.try_register(&pattern_b(), PatternType::B)?;
    log::info!("Seeded {} built-in pattern(s)", catalog.len());
    Ok(())
}

impl PatternCatalog {
    /// A catalog holding only the built-in patterns.
    pub fn with_builtins() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        register_builtins(&mut catalog)?;
        Ok(catalog)
    }
}
