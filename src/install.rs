//! Installing the stylesheet into a profile's chrome directory.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::error::{Error, Result};
use crate::report::Reporter;

/// File name Firefox expects inside the chrome directory.
pub const TARGET_FILE_NAME: &str = "userChrome.css";

/// Installs or updates `userChrome.css` in the given profile.
///
/// Creates `<profile>/chrome/` if absent and copies `source_css` over
/// `<profile>/chrome/userChrome.css`, replacing whatever is there. The
/// source's modification time is carried over where the platform allows;
/// failure to do so is not an error.
///
/// Returns the path of the installed file.
///
/// # Errors
/// Returns [`Error::CopyFailed`] on any I/O failure; nothing is left in a
/// partial state beyond an already-created chrome directory.
pub fn install_css(profile_dir: &Path, source_css: &Path, reporter: &Reporter) -> Result<PathBuf> {
    let chrome_dir = profile_dir.join("chrome");
    fs::create_dir_all(&chrome_dir).map_err(|source| Error::CopyFailed {
        dest: chrome_dir.clone(),
        source,
    })?;

    let target = chrome_dir.join(TARGET_FILE_NAME);
    fs::copy(source_css, &target).map_err(|source| Error::CopyFailed {
        dest: target.clone(),
        source,
    })?;
    preserve_mtime(source_css, &target);

    reporter.debug(format!("successfully installed to: {}", target.display()));
    Ok(target)
}

/// Best-effort copy of the source's mtime onto the target.
fn preserve_mtime(source: &Path, target: &Path) {
    let Ok(meta) = fs::metadata(source) else {
        return;
    };
    let Ok(mtime) = meta.modified() else {
        return;
    };
    let _ = filetime::set_file_mtime(target, FileTime::from_system_time(mtime));
}
