//! Error types for clustr operations.

use thiserror::Error;

/// Errors produced by clustering operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument failed validation before computation started.
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        arg: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// An accessor was called for a result artifact whose bit was not set
    /// in the result options at compute time.
    #[error("result `{artifact}` was not requested in the result options")]
    ResultNotRequested {
        /// Name of the artifact the accessor would have returned.
        artifact: &'static str,
    },
}

/// Convenience alias for clustering results.
pub type Result<T> = std::result::Result<T, Error>;
