//! Finds the default Firefox profile and installs the bundled
//! `userChrome.css` into its `chrome/` directory, to customize the browser
//! UI (the shipped stylesheet hides unwanted context-menu items).
//!
//! The stylesheet is expected next to the installed binary, mirroring how
//! it is distributed. Firefox only honors it after two `about:config`
//! preferences are flipped by hand; the tool prints those on success.

pub mod error;
pub mod install;
pub mod platform;
pub mod profile;
pub mod report;

use std::path::PathBuf;

pub use error::{Error, Result};
use platform::Platform;
use report::Reporter;

/// File name of the bundled stylesheet, looked up next to the executable.
pub const SOURCE_FILE_NAME: &str = "userChrome.css";

/// Preferences the user must set manually in `about:config`.
pub const REQUIRED_PREFS: [&str; 2] = [
    "toolkit.legacyUserProfileCustomizations.stylesheets = true",
    "widget.macos.native-context-menus = false",
];

/// Path of the bundled stylesheet: `userChrome.css` next to the executable.
pub fn source_css_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        Error::Io(std::io::Error::other("executable has no parent directory"))
    })?;
    Ok(dir.join(SOURCE_FILE_NAME))
}

/// Runs the full install: resolve source, locate profile, copy stylesheet.
///
/// Short-circuits on the first failure. The profile locator is never
/// invoked when the source stylesheet is missing.
pub fn run(reporter: &Reporter) -> Result<()> {
    let source_css = source_css_path()?;
    if !source_css.is_file() {
        return Err(Error::SourceMissing(source_css));
    }

    let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
    let root = platform::profiles_root(Platform::current(), &home);
    let profile_dir = profile::find_default_profile(&root, reporter)?;

    install::install_css(&profile_dir, &source_css, reporter)?;

    reporter.info("Installation completed successfully!");
    reporter.info("");
    reporter.info("Make sure you also set the necessary about:config values:");
    for pref in REQUIRED_PREFS {
        reporter.info(format!("  - {pref}"));
    }
    Ok(())
}
