//! Person and movie tables for degrees (Layer 2).
//!
//! `degrees_data` owns the data the search runs over:
//!
//! - [`Database`] - People, movies, and a case-insensitive name index. It
//!   implements [`AdjacencyProvider`](degrees_search::AdjacencyProvider), so
//!   people are linked through the movies they starred in.
//! - [`load_dir`] - Builds a [`Database`] from `people.csv`, `movies.csv` and
//!   `stars.csv`.
//! - [`resolve_person`] - Turns a typed name into a person id, deferring to a
//!   caller-supplied chooser when several people share the name.
//!
//! # Example
//!
//! ```
//! use degrees_data::{Database, Movie, Person};
//! use degrees_search::shortest_path;
//!
//! let mut db = Database::new();
//! db.insert_person(Person::new("1", "Kate Winslet", Some("1975")));
//! db.insert_person(Person::new("2", "Leonardo DiCaprio", Some("1974")));
//! db.insert_movie(Movie::new("10", "Titanic", Some("1997")));
//! db.link_star("1", "10");
//! db.link_star("2", "10");
//!
//! let path = shortest_path(&db, &"1".to_string(), &"2".to_string()).unwrap();
//! assert_eq!(path, Some(vec![("10".to_string(), "2".to_string())]));
//! ```

/// In-memory people and movie tables.
pub mod database;

/// Error types for loading and name resolution.
pub mod error;

/// CSV loading.
pub mod loader;

/// Record types.
pub mod model;

/// Name to id resolution.
pub mod resolve;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::database::Database;
    pub use crate::error::{LoadError, ResolveError};
    pub use crate::loader::{LoadSummary, load_dir};
    pub use crate::model::{Candidate, Movie, Person};
    pub use crate::resolve::resolve_person;
}

pub use database::Database;
pub use error::{LoadError, ResolveError};
pub use loader::{LoadSummary, load_dir};
pub use model::{Candidate, Movie, Person};
pub use resolve::resolve_person;
