//! Error types for manifest generation, guard injection and helper appending.
//!
//! Only conditions that stop a batch tool are represented here. A missing or
//! malformed route manifest is not an error: the cache degrades to an empty
//! manifest instead (see [`crate::cache`]).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for all skipguard operations.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The directory handed to the injector does not exist.
    #[error("Directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The shared bootstrap file the helpers are appended to does not exist.
    #[error("{} does not exist", .0.display())]
    BootstrapNotFound(PathBuf),

    /// Reading or writing a file failed.
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        /// What was being attempted ("read", "write", ...)
        action: &'static str,
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed part-way.
    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        /// Root of the traversal
        root: PathBuf,
        /// Underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// The route registry command could not be run or reported failure.
    #[error("route registry command `{command}` failed: {reason}")]
    RouteCommand {
        /// The command line that was executed
        command: String,
        /// Why it failed (exit status, stderr excerpt, spawn error)
        reason: String,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuardError {
    /// Wraps an I/O error with the action and path it relates to.
    pub fn io(action: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// A specialized Result type for skipguard operations.
pub type Result<T, E = GuardError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_not_found_names_the_directory() {
        let err = GuardError::DirectoryNotFound(PathBuf::from("tests/Browser"));
        assert_eq!(err.to_string(), "Directory tests/Browser does not exist");
    }

    #[test]
    fn io_error_includes_action_and_path() {
        let err = GuardError::io(
            "write",
            "tests/Pest.php",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to write tests/Pest.php"));
        assert!(msg.contains("denied"));
    }
}
