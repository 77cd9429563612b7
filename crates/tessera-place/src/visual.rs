use glam::Vec3;
use tessera_core::{CubeRotation, PatternType};

/// Presentation hook for placed blocks.
///
/// The placement core never looks inside a handle. It asks for one when a
/// block is committed and gives it back when the block is destroyed.
pub trait VisualFactory {
    type Handle;

    /// Instantiate the visual for `pattern_type` at a world position and rotation.
    fn create(
        &mut self,
        pattern_type: PatternType,
        position: Vec3,
        rotation: CubeRotation,
    ) -> Self::Handle;

    /// Dispose of a visual created by this factory.
    fn release(&mut self, handle: Self::Handle);
}

/// Factory for callers with nothing to draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVisuals;

impl VisualFactory for NoVisuals {
    type Handle = ();

    fn create(&mut self, _: PatternType, _: Vec3, _: CubeRotation) -> Self::Handle {}

    fn release(&mut self, _: Self::Handle) {}
}
