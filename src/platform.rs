//! Host platform detection and per-platform artifact naming.
//!
//! The platform is an explicit value handed to the builder rather than
//! a global read inside it, so the unsupported-platform branch and both
//! artifact names can be exercised in tests on any host.

use clap::ValueEnum;

/// Platforms the build task knows about.
///
/// Windows is recognized but unsupported: the build short-circuits
/// there with a diagnostic instead of failing.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Linux,
    #[value(name = "macos")]
    MacOs,
    Windows,
}

impl Platform {
    /// Detect the host platform.
    ///
    /// Anything that is neither Windows nor macOS is treated as Linux;
    /// the build artifact uses the `.so` convention there.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Filename of the `sds_go` shared library on this platform, or
    /// `None` when the platform cannot build it.
    pub fn artifact_name(self) -> Option<&'static str> {
        match self {
            Platform::Linux => Some("libsds_go.so"),
            Platform::MacOs => Some("libsds_go.dylib"),
            Platform::Windows => None,
        }
    }
}
