pub mod catalog;
pub mod defaults;
pub mod pattern;

pub use catalog::{CatalogError, PatternCatalog};
pub use pattern::{Pattern, PatternVoxel};
