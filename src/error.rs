use thiserror::Error;

/// Errors returned by clustering algorithms in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count does not fit the 8-bit assignment map.
    #[error("invalid cluster count: requested {requested}, but cluster ids are 8-bit (max 255)")]
    TooManyClusters {
        /// Requested number of clusters.
        requested: usize,
    },

    /// Points in a dataset have inconsistent dimensionality, or a
    /// caller-provided buffer has the wrong length.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality or length.
        expected: usize,
        /// Found dimensionality or length.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
