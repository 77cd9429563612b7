use crate::pattern::{Pattern, PatternVoxel};
use glam::IVec3;
use std::collections::{HashMap, HashSet};
use tessera_core::PatternType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Pattern {0} has no voxels")]
    EmptyPattern(PatternType),
    #[error("Pattern {pattern_type} must start at the origin, first voxel is at {first}")]
    NonOriginJoin { pattern_type: PatternType, first: IVec3 },
    #[error("Pattern {pattern_type} lists offset {index} more than once")]
    DuplicateIndex { pattern_type: PatternType, index: IVec3 },
    #[error("Pattern {0} is already registered")]
    DuplicateType(PatternType),
    #[error("No pattern registered for {0}")]
    NotFound(PatternType),
}

/// Registry of immutable patterns, one per pattern type.
///
/// Built once at startup and handed to every block by reference. There is no
/// way to replace or remove a pattern after registration.
#[derive(Debug, Default)]
pub struct PatternCatalog {
    patterns: HashMap<PatternType, Pattern>,
}

impl PatternCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern, reporting why it was refused.
    ///
    /// The voxels are copied; the caller keeps its own list.
    pub fn try_register(
        &mut self,
        voxels: &[PatternVoxel],
        pattern_type: PatternType,
    ) -> Result<(), CatalogError> {
        let first = voxels
            .first()
            .ok_or(CatalogError::EmptyPattern(pattern_type))?;
        if first.index != IVec3::ZERO {
            return Err(CatalogError::NonOriginJoin {
                pattern_type,
                first: first.index,
            });
        }
        let mut seen = HashSet::with_capacity(voxels.len());
        for voxel in voxels {
            if !seen.insert(voxel.index) {
                return Err(CatalogError::DuplicateIndex {
                    pattern_type,
                    index: voxel.index,
                });
            }
        }
        if self.patterns.contains_key(&pattern_type) {
            return Err(CatalogError::DuplicateType(pattern_type));
        }

        self.patterns
            .insert(pattern_type, Pattern::new(pattern_type, voxels.to_vec()));
        log::debug!(
            "Registered pattern {pattern_type} with {} voxels",
            voxels.len()
        );
        Ok(())
    }

    /// Register a pattern. Returns false, leaving the catalog untouched, if
    /// [`PatternCatalog::try_register`] refuses it.
    pub fn register(&mut self, voxels: &[PatternVoxel], pattern_type: PatternType) -> bool {
        match self.try_register(voxels, pattern_type) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Pattern rejected: {e}");
                false
            }
        }
    }

    /// Look up the pattern registered for `pattern_type`.
    pub fn lookup(&self, pattern_type: PatternType) -> Result<&Pattern, CatalogError> {
        self.patterns
            .get(&pattern_type)
            .ok_or(CatalogError::NotFound(pattern_type))
    }

    /// All registered patterns, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.values()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Direction;

    fn column(height: i32) -> Vec<PatternVoxel> {
        (0..height)
            .map(|y| PatternVoxel::solid(IVec3::new(0, y, 0)))
            .collect()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = PatternCatalog::new();
        assert!(catalog.register(&column(3), PatternType(5)));
        let pattern = catalog.lookup(PatternType(5)).expect("registered");
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.pattern_type(), PatternType(5));
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let mut catalog = PatternCatalog::new();
        assert_eq!(
            catalog.try_register(&[], PatternType(5)),
            Err(CatalogError::EmptyPattern(PatternType(5)))
        );
        assert!(!catalog.register(&[], PatternType(5)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_non_origin_first_voxel_rejected() {
        let mut catalog = PatternCatalog::new();
        let voxels = vec![
            PatternVoxel::solid(IVec3::new(0, 1, 0)),
            PatternVoxel::solid(IVec3::ZERO),
        ];
        assert!(matches!(
            catalog.try_register(&voxels, PatternType(5)),
            Err(CatalogError::NonOriginJoin { .. })
        ));
        assert!(catalog.lookup(PatternType(5)).is_err());
    }

    #[test]
    fn test_repeated_offset_rejected() {
        let mut catalog = PatternCatalog::new();
        let voxels = vec![
            PatternVoxel::solid(IVec3::ZERO),
            PatternVoxel::solid(IVec3::Y),
            PatternVoxel::new(IVec3::Y, vec![Direction::East]),
        ];
        assert_eq!(
            catalog.try_register(&voxels, PatternType(5)),
            Err(CatalogError::DuplicateIndex {
                pattern_type: PatternType(5),
                index: IVec3::Y,
            })
        );
    }

    #[test]
    fn test_duplicate_type_rejected_without_overwrite() {
        let mut catalog = PatternCatalog::new();
        assert!(catalog.register(&column(3), PatternType(5)));
        assert!(!catalog.register(&column(7), PatternType(5)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup(PatternType(5)).expect("registered").len(), 3);
    }

    #[test]
    fn test_lookup_unknown_type_is_not_found() {
        let catalog = PatternCatalog::new();
        assert_eq!(
            catalog.lookup(PatternType(42)).err(),
            Some(CatalogError::NotFound(PatternType(42)))
        );
    }

    #[test]
    fn test_registration_copies_input() {
        let mut catalog = PatternCatalog::new();
        let mut voxels = column(2);
        assert!(catalog.register(&voxels, PatternType(5)));
        voxels.push(PatternVoxel::solid(IVec3::new(0, 2, 0)));
        voxels[0].directions.push(Direction::Up);
        let stored = catalog.lookup(PatternType(5)).expect("registered");
        assert_eq!(stored.len(), 2);
        assert!(stored.voxels()[0].directions.is_empty());
    }

    #[test]
    fn test_every_pattern_starts_at_origin() {
        let mut catalog = PatternCatalog::new();
        catalog.register(&column(4), PatternType(1));
        catalog.register(&column(2), PatternType(2));
        catalog.register(&[PatternVoxel::solid(IVec3::X)], PatternType(3));
        assert_eq!(catalog.all().count(), 2);
        for pattern in catalog.all() {
            assert_eq!(pattern.voxels()[0].index, IVec3::ZERO);
        }
    }
}
