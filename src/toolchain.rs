//! External toolchain invocation (git and cargo).
//!
//! Uses the system git command, which automatically handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Seam for the external commands the build pipeline runs.
///
/// Production code uses [`ShellToolchain`]; tests substitute a fake
/// collaborator to exercise the pipeline without network access or a
/// full compile.
pub trait Toolchain {
    /// Clone `url` into `target_dir`.
    fn git_clone(&self, url: &str, target_dir: &Path) -> Result<()>;

    /// Run a release-mode cargo build inside `source_dir`.
    fn cargo_build_release(&self, source_dir: &Path) -> Result<()>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn git_clone(&self, url: &str, target_dir: &Path) -> Result<()> {
        (**self).git_clone(url, target_dir)
    }

    fn cargo_build_release(&self, source_dir: &Path) -> Result<()> {
        (**self).cargo_build_release(source_dir)
    }
}

/// Runs the real `git` and `cargo` binaries via `std::process`.
pub struct ShellToolchain;

impl Toolchain for ShellToolchain {
    fn git_clone(&self, url: &str, target_dir: &Path) -> Result<()> {
        log::info!("Cloning {}", url);

        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(target_dir)
            .output()
            .map_err(|e| Error::GitClone {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            // Provide helpful error message for common auth failures
            let message = if stderr.contains("Authentication failed")
                || stderr.contains("Permission denied")
                || stderr.contains("Could not read from remote repository")
            {
                format!(
                    "Authentication failed. Make sure you have access to the repository.\n\
                    For private repos, ensure you have:\n\
                    - SSH key added to ssh-agent\n\
                    - Git credentials configured\n\
                    - Personal access token set up\n\
                    Error: {}",
                    stderr
                )
            } else {
                stderr.to_string()
            };

            return Err(Error::GitClone {
                url: url.to_string(),
                message,
            });
        }

        Ok(())
    }

    fn cargo_build_release(&self, source_dir: &Path) -> Result<()> {
        log::info!("Building {} in release mode", source_dir.display());

        let output = Command::new("cargo")
            .args(["build", "--release"])
            .current_dir(source_dir)
            .output()
            .map_err(|e| Error::CommandFailed {
                command: "cargo build --release".to_string(),
                dir: source_dir.to_path_buf(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::CommandFailed {
                command: "cargo build --release".to_string(),
                dir: source_dir.to_path_buf(),
                stderr: stderr.to_string(),
            });
        }

        Ok(())
    }
}

// Note: Integration tests for ShellToolchain would require network
// access and a full Rust toolchain in the clone, so the pipeline is
// tested against a fake Toolchain in builder.rs instead.
