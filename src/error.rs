//! Errors raised while loading the documentation tree.
//!
//! Extraction never fails; only filesystem problems surface here. Any
//! [`LoadError`] aborts the whole load.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("documentation root does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("failed to walk documentation tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),
}
