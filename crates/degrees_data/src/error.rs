//! Error types for loading data and resolving names.

use std::path::PathBuf;

/// Errors that can occur while loading a data directory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data directory does not exist or is not a directory.
    #[error("data directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A required CSV file is missing from the data directory.
    #[error("missing data file: {}", .0.display())]
    MissingFile(PathBuf),

    /// A CSV file could not be read or a row could not be parsed.
    #[error("failed to read {}: {source}", .path.display())]
    Csv {
        /// The file being read.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },
}

/// Errors that can occur while resolving a name to a person id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No person has the given name.
    #[error("no person named '{0}'")]
    NotFound(String),

    /// Several people share the name and none was chosen.
    #[error("'{name}' matches {candidates} people and none was chosen")]
    Ambiguous {
        /// The name that was looked up.
        name: String,
        /// How many people share it.
        candidates: usize,
    },

    /// The chosen id is not one of the people sharing the name.
    #[error("'{choice}' is not a person named '{name}'")]
    InvalidChoice {
        /// The name that was looked up.
        name: String,
        /// The id that was chosen.
        choice: String,
    },
}

impl LoadError {
    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
