//! Error types.
//!
//! Capacity infeasibility is not an error. It is signalled by
//! [`crate::solution::INFEASIBLE`] or by a `None` flip delta.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible crate operations.
pub type KpfsResult<T> = Result<T, KpfsError>;

/// Errors raised while loading instances, writing results or configuring a
/// driver.
#[derive(Debug, Error)]
pub enum KpfsError {
    /// The instance text ended before the named field was read.
    #[error("unexpected end of instance data while reading {expected}")]
    UnexpectedEof {
        /// Field that was being read.
        expected: &'static str,
    },

    /// A token could not be parsed as the named field.
    #[error("invalid token {token:?} for {expected}")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Field that was being read.
        expected: &'static str,
    },

    /// A group references an item outside `[0, item_count)`.
    #[error("group {group} references item {item}, but the instance has {item_count} items")]
    ItemOutOfRange {
        group: usize,
        item: usize,
        item_count: usize,
    },

    /// An item is listed more than once in the same group.
    #[error("item {item} is listed twice in group {group}")]
    DuplicateMember { group: usize, item: usize },

    /// Profit and weight vectors disagree on the item count.
    #[error("{profits} profits but {weights} weights")]
    LengthMismatch { profits: usize, weights: usize },

    /// A weight or the capacity is negative.
    #[error("{what} must be non-negative, got {value}")]
    Negative { what: &'static str, value: i64 },

    /// A driver configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KpfsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KpfsError::Io {
            path: path.into(),
            source,
        }
    }
}
