//! Shared fixtures for placement tests.

use crate::visual::VisualFactory;
use glam::Vec3;
use tessera_core::{CubeRotation, PatternType};
use tessera_patterns::PatternCatalog;

pub(crate) fn builtin_catalog() -> PatternCatalog {
    PatternCatalog::with_builtins().expect("builtins register")
}

/// Visual factory that hands out sequential ids and records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingVisuals {
    pub created: Vec<(PatternType, Vec3, CubeRotation)>,
    pub released: Vec<u32>,
}

impl VisualFactory for RecordingVisuals {
    type Handle = u32;

    fn create(&mut self, pattern_type: PatternType, position: Vec3, rotation: CubeRotation) -> u32 {
        self.created.push((pattern_type, position, rotation));
        (self.created.len() - 1) as u32
    }

    fn release(&mut self, handle: u32) {
        self.released.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_visuals_hand_out_sequential_ids() {
        let mut visuals = RecordingVisuals::default();
        let a = visuals.create(PatternType::B, Vec3::ZERO, CubeRotation::IDENTITY);
        let b = visuals.create(PatternType::B, Vec3::ONE, CubeRotation::about_y(1));
        assert_eq!((a, b), (0, 1));
        visuals.release(b);
        assert_eq!(visuals.released, vec![1]);
    }
}
