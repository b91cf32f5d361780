//! Discovery and loading of translation catalogs.
/// Translation store and indexer errors
pub mod types;
/// Workspace walker
pub mod workspace;

pub use types::{
    IndexerError,
    TranslationStore,
};
pub use workspace::WorkspaceIndexer;
