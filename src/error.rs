//! # Error Handling
//!
//! Centralized error handling for the `sds-build` application, built on
//! `thiserror`. Each variant carries the context needed to understand
//! which external step failed: the clone, the release build, or the
//! final copy into the development path.
//!
//! Propagation policy is stop-on-first-error: no step is retried and no
//! partial output is rolled back beyond the guaranteed removal of the
//! temporary working directory.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for sds-build operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while cloning the source repository.
    #[error("Git clone error for {url}: {message}")]
    GitClone { url: String, message: String },

    /// An external command exited with a non-zero status.
    #[error("Command failed in {}: {command} - {stderr}", dir.display())]
    CommandFailed {
        command: String,
        dir: PathBuf,
        stderr: String,
    },

    /// Copying the built library into the development path failed.
    ///
    /// This is also how a missing or unwritable development path
    /// surfaces; there is no pre-flight check.
    #[error("Copy error: {} -> {}: {source}", src.display(), dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_git_clone() {
        let error = Error::GitClone {
            url: "https://github.com/DataDog/dd-sensitive-data-scanner".to_string(),
            message: "Authentication failed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Git clone error"));
        assert!(display.contains("dd-sensitive-data-scanner"));
        assert!(display.contains("Authentication failed"));
    }

    #[test]
    fn test_error_display_command_failed() {
        let error = Error::CommandFailed {
            command: "cargo build --release".to_string(),
            dir: PathBuf::from("/tmp/work/sds-go/rust"),
            stderr: "error[E0308]: mismatched types".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Command failed"));
        assert!(display.contains("cargo build --release"));
        assert!(display.contains("/tmp/work/sds-go/rust"));
        assert!(display.contains("mismatched types"));
    }

    #[test]
    fn test_error_display_copy() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error = Error::Copy {
            src: PathBuf::from("target/release/libsds_go.so"),
            dst: PathBuf::from("/dev-path/lib/libsds_go.so"),
            source: io_error,
        };
        let display = format!("{}", error);
        assert!(display.contains("Copy error"));
        assert!(display.contains("target/release/libsds_go.so"));
        assert!(display.contains("/dev-path/lib/libsds_go.so"));
        assert!(display.contains("No such file"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }
}
