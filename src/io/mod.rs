pub mod sink;

// Explicit re-exports for public API
pub use sink::{file_name, ArtifactSink, DirectorySink};
