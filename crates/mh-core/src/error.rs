//! Error types for the hunt engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for hunt operations.
pub type HuntResult<T> = Result<T, HuntError>;

/// Errors that can occur while creating, playing, or persisting hunts.
#[derive(Debug, Error)]
pub enum HuntError {
    /// No hunt is stored under the given name.
    #[error("no hunt named '{0}'")]
    HuntNotFound(String),

    /// A hunt was created with a non-positive mark target.
    #[error("total marks must be positive, got {0}")]
    InvalidTotalMarks(u32),

    /// A hunt was created with an empty name.
    #[error("hunt name must not be empty")]
    EmptyName,

    /// A die produced a value outside its faces.
    #[error("d{sides} rolled {value}, outside 1-{sides}")]
    InvalidDie {
        /// Number of faces on the die.
        sides: u32,
        /// The offending value.
        value: u32,
    },

    /// A scripted die source ran out of values.
    #[error("scripted dice exhausted")]
    DiceExhausted,

    /// Reading or writing the hunt file failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The hunt mapping could not be encoded or decoded.
    #[error("invalid hunt data: {0}")]
    Serialization(#[from] serde_json::Error),
}
