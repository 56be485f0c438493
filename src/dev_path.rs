//! Development path resolution.
//!
//! The development path is where locally built native dependencies are
//! installed for the surrounding development environment. It is owned
//! by that environment, not by this tool: it must already exist, and
//! the builder only writes into its `lib/` subdirectory.
//!
//! Resolution order: the `--dev-path` flag, the `SDS_DEV_PATH`
//! environment variable (both handled at the CLI layer), then `dev`
//! under the current working directory.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default development path: `dev` under the current working directory.
pub fn default_dev_path() -> Result<PathBuf> {
    Ok(env::current_dir()?.join("dev"))
}

/// The library directory inside a development path.
pub fn lib_dir(dev_path: &Path) -> PathBuf {
    dev_path.join("lib")
}
