//! Trait seams between the pipeline and its storage backends.

pub mod archive;
pub mod table;

pub use archive::ArtifactStore;
pub use table::JobTable;
