//! Error types for the command-line tool.

use std::io;

use degrees_data::{LoadError, ResolveError};
use degrees_search::SearchError;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The data directory could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A name did not resolve to exactly one person.
    #[error("Person not found.")]
    PersonNotFound(#[from] ResolveError),

    /// The search failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
