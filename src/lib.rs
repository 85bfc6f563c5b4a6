//! Degrees of separation over a people/movies relationship graph.
//!

/// Layer 1: frontier-based breadth-first search.
pub use degrees_search as search;

/// Layer 2: person and movie tables, CSV loading, and name resolution.
pub use degrees_data as data;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use degrees_data::prelude::*;
    pub use degrees_search::prelude::*;
}
