use crate::state::BlockState;
use tessera_patterns::CatalogError;

/// Errors that can occur while building or committing a block.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("block cannot be placed here: {state}")]
    NotPlaceable { state: BlockState },
}
