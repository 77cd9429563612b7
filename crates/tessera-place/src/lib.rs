pub mod block;
pub mod error;
pub mod placement;
pub mod state;
pub mod visual;

#[cfg(test)]
mod test_harness;

pub use block::Block;
pub use error::PlacementError;
pub use placement::{MappedVoxel, Placement};
pub use state::BlockState;
pub use visual::{NoVisuals, VisualFactory};
