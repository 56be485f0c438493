//! # SDS Library Builder
//!
//! This library backs the `sds-build` command-line tool, which produces
//! the `sds_go` native shared library used by the surrounding
//! development environment. The pipeline is deliberately simple: clone
//! the scanner sources into a scoped temporary directory, run a
//! release-mode build of the Rust bindings crate, and copy the
//! resulting shared library into the development path's `lib/`
//! directory.
//!
//! ## Quick Example
//!
//! ```
//! use sds_build::platform::Platform;
//!
//! // Each supported platform maps to a shared library filename.
//! assert_eq!(Platform::Linux.artifact_name(), Some("libsds_go.so"));
//! assert_eq!(Platform::MacOs.artifact_name(), Some("libsds_go.dylib"));
//!
//! // Windows is recognized but cannot build the library.
//! assert_eq!(Platform::Windows.artifact_name(), None);
//! ```
//!
//! ## Core Concepts
//!
//! - **Platform (`platform`)**: An explicit capability value describing
//!   the host. The builder receives it as input rather than reading
//!   ambient process state, so every platform branch is testable.
//! - **Toolchain (`toolchain`)**: The seam for external process
//!   invocation (git and cargo). Production code uses the real
//!   binaries; tests substitute a fake collaborator.
//! - **Development path (`dev_path`)**: A pre-existing directory,
//!   resolved outside the pipeline, where locally built native
//!   dependencies are installed.
//! - **Builder (`builder`)**: The linear clone/build/install pipeline
//!   with guaranteed temporary-directory cleanup on every exit path.

pub mod builder;
pub mod dev_path;
pub mod error;
pub mod platform;
pub mod toolchain;
