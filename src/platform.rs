//! Cross-platform resolution of the Firefox profiles directory.
//!
//! Firefox keeps profiles in a different place on each OS. `profiles_root`
//! is a pure function over the platform and home directory so the formula
//! can be tested without touching the filesystem.

use std::path::{Path, PathBuf};

/// Supported platform families for profile lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// Linux, the BSDs, and anything else Unix-like.
    Other,
}

impl Platform {
    /// Detect the platform the binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

/// Returns where Firefox stores profiles on the given platform.
///
/// Locations:
/// - macOS: `~/Library/Application Support/Firefox/Profiles`
/// - Windows: `~/AppData/Roaming/Mozilla/Firefox/Profiles`
/// - everywhere else: `~/.mozilla/firefox`
///
/// The directory is not required to exist; callers check that.
pub fn profiles_root(platform: Platform, home: &Path) -> PathBuf {
    match platform {
        Platform::MacOs => home
            .join("Library")
            .join("Application Support")
            .join("Firefox")
            .join("Profiles"),
        Platform::Windows => home
            .join("AppData")
            .join("Roaming")
            .join("Mozilla")
            .join("Firefox")
            .join("Profiles"),
        Platform::Other => home.join(".mozilla").join("firefox"),
    }
}
