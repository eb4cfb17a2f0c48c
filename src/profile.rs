//! Locating the default Firefox profile.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::report::Reporter;

/// Firefox names the default profile directory with this suffix.
pub const PROFILE_SUFFIX: &str = ".default-release";

/// Finds the default profile directory under the profiles root.
///
/// Scans direct children only. When several directories carry the suffix,
/// directory-listing order is filesystem-dependent, so the candidates are
/// sorted and the lexicographically smallest name wins.
///
/// # Errors
/// Returns [`Error::ProfilesRootMissing`] if `root` is not a directory, or
/// [`Error::NoMatchingProfile`] if no child directory matches.
pub fn find_default_profile(root: &Path, reporter: &Reporter) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(Error::ProfilesRootMissing(root.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.ends_with(PROFILE_SUFFIX) {
            candidates.push(entry.path());
        }
    }

    candidates.sort();
    match candidates.into_iter().next() {
        Some(profile) => {
            reporter.debug(format!("found Firefox profile: {}", profile.display()));
            Ok(profile)
        }
        None => Err(Error::NoMatchingProfile(root.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Reporter {
        Reporter::new(false)
    }

    #[test]
    fn missing_root_reports_root_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("does-not-exist");

        let err = find_default_profile(&root, &quiet()).unwrap_err();
        assert!(matches!(err, Error::ProfilesRootMissing(p) if p == root));
    }

    #[test]
    fn picks_suffixed_directory_over_others() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("foo")).unwrap();
        fs::create_dir(tmp.path().join("bar.default-release")).unwrap();
        fs::create_dir(tmp.path().join("baz.default-release")).unwrap();

        let profile = find_default_profile(tmp.path(), &quiet()).unwrap();
        let name = profile.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with(PROFILE_SUFFIX));
        assert_ne!(name, "foo");
    }

    #[test]
    fn selection_is_lexicographically_smallest() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("zzz.default-release")).unwrap();
        fs::create_dir(tmp.path().join("aaa.default-release")).unwrap();
        fs::create_dir(tmp.path().join("mmm.default-release")).unwrap();

        let profile = find_default_profile(tmp.path(), &quiet()).unwrap();
        assert_eq!(profile, tmp.path().join("aaa.default-release"));
    }

    #[test]
    fn ignores_files_with_matching_suffix() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("abc.default-release"), "not a dir").unwrap();

        let err = find_default_profile(tmp.path(), &quiet()).unwrap_err();
        assert!(matches!(err, Error::NoMatchingProfile(_)));
    }

    #[test]
    fn empty_root_reports_no_matching_profile() {
        let tmp = tempfile::tempdir().unwrap();

        let err = find_default_profile(tmp.path(), &quiet()).unwrap_err();
        assert!(matches!(err, Error::NoMatchingProfile(p) if p == tmp.path()));
    }

    #[test]
    fn does_not_recurse_into_children() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("nested").join("deep.default-release")).unwrap();

        let err = find_default_profile(tmp.path(), &quiet()).unwrap_err();
        assert!(matches!(err, Error::NoMatchingProfile(_)));
    }
}
