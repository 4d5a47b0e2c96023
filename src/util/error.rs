// icongen - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; the causal chain is kept intact
// for the single top-level diagnostic report in main.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for icongen operations.
///
/// The tool's only failure class is filesystem I/O (directory creation,
/// file write, executable-path resolution), carried here with the path
/// and the operation that failed.
#[derive(Debug)]
pub enum IconGenError {
    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for IconGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IconGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for icongen results.
pub type Result<T> = std::result::Result<T, IconGenError>;
