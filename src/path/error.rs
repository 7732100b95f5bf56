//! Error types for property path tokenization and traversal.

use std::fmt;

/// Errors that can occur while tokenizing or traversing a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A `[` with no matching `]` in the same segment.
    UnmatchedBracket { position: usize },
    /// Advanced past the last segment of the path.
    EndOfPath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::UnmatchedBracket { position } => {
                write!(f, "Unmatched '[' at position {}", position)
            }
            PathError::EndOfPath => {
                write!(f, "No segment remains after the current one")
            }
        }
    }
}

impl std::error::Error for PathError {}
