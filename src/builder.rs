//! Library build pipeline.
//!
//! A single linear pipeline with one conditional early exit: detect an
//! unsupported platform and stop, otherwise clone the scanner sources
//! into a scoped temporary directory, build the `sds-go/rust` bindings
//! crate in release mode, and copy the shared library into the
//! development `lib/` directory. The temporary directory is removed on
//! every exit path, success or failure.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::dev_path;
use crate::error::{Error, Result};
use crate::platform::Platform;
use crate::toolchain::Toolchain;

/// Source repository for the sensitive data scanner.
pub const DEFAULT_REPO_URL: &str = "https://github.com/DataDog/dd-sensitive-data-scanner";

/// Relative path of the Rust bindings crate inside the cloned tree.
const SOURCE_SUBDIR: &str = "sds-go/rust";

/// Inputs for one build run.
///
/// Everything is explicit so tests can substitute each piece: no
/// ambient platform reads, no hardcoded URL inside the pipeline.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Repository to clone.
    pub repo_url: String,

    /// Branch to build. Accepted but not yet applied to the clone; the
    /// pipeline always builds the repository's default branch.
    pub branch: String,

    /// Host platform capability, decided by the caller.
    pub platform: Platform,

    /// Pre-existing development path whose `lib/` receives the library.
    pub dev_path: PathBuf,
}

impl BuildConfig {
    /// Configuration with the standard repository URL and branch for
    /// the given platform and development path.
    pub fn new(platform: Platform, dev_path: PathBuf) -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            branch: "main".to_string(),
            platform,
            dev_path,
        }
    }
}

/// Result of a build run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The host platform cannot build the library; nothing was done.
    UnsupportedPlatform,
    /// The library was installed at this path.
    Installed(PathBuf),
}

/// Orchestrates the clone, build, and install steps.
pub struct LibraryBuilder<T: Toolchain> {
    config: BuildConfig,
    toolchain: T,
}

impl<T: Toolchain> LibraryBuilder<T> {
    pub fn new(config: BuildConfig, toolchain: T) -> Self {
        Self { config, toolchain }
    }

    /// Run the full pipeline: clone, build, install.
    ///
    /// On an unsupported platform this returns
    /// [`Outcome::UnsupportedPlatform`] before touching the filesystem
    /// or the network. Any failing step aborts the run immediately; the
    /// temporary working directory is removed regardless of where the
    /// run stopped.
    pub fn build(&self) -> Result<Outcome> {
        let Some(artifact) = self.config.platform.artifact_name() else {
            log::warn!("host platform cannot build the sds library");
            return Ok(Outcome::UnsupportedPlatform);
        };

        let temp_dir = TempDir::new()?;
        let checkout = temp_dir.path().join(repo_dir_name(&self.config.repo_url));

        // TODO: check out the requested branch (config.branch) after
        // cloning instead of always building the default branch.
        self.toolchain.git_clone(&self.config.repo_url, &checkout)?;

        let source_dir = checkout.join(SOURCE_SUBDIR);
        self.toolchain.cargo_build_release(&source_dir)?;

        let built = source_dir.join("target/release").join(artifact);
        let dest = dev_path::lib_dir(&self.config.dev_path).join(artifact);

        log::info!("Installing {} to {}", artifact, dest.display());
        fs::copy(&built, &dest).map_err(|source| Error::Copy {
            src: built.clone(),
            dst: dest.clone(),
            source,
        })?;

        // Surfaces deletion errors on the success path; failure paths
        // fall back to cleanup on drop.
        temp_dir.close()?;

        Ok(Outcome::Installed(dest))
    }
}

/// Directory name git clones into, derived from the URL's last segment.
fn repo_dir_name(url: &str) -> &str {
    let name = url.trim_end_matches('/').rsplit('/').next().unwrap_or(url);
    name.strip_suffix(".git").unwrap_or(name)
}
