//! Error types.
//!
//! Rendering and routing never fail; the only fallible operation in this
//! crate is weight validation used by configuration loaders.

/// Errors reported by `jobset_table`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A column weight is negative, above one, or not a finite number.
    #[error("invalid weight {weight} for column {column}: expected a fraction between 0 and 1")]
    InvalidColumnWeight {
        /// Data key of the offending column.
        column: &'static str,
        /// The rejected weight.
        weight: f64,
    },
}

/// Result alias for `jobset_table` operations.
pub type Result<T> = std::result::Result<T, Error>;
