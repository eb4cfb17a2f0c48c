//! Error types for the userchrome installer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the installer's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating a profile or installing the stylesheet.
#[derive(Error, Debug)]
pub enum Error {
    /// The home directory could not be determined.
    #[error("could not determine the home directory")]
    HomeNotFound,

    /// The platform's Firefox profiles directory does not exist.
    #[error("Firefox profiles directory not found: {}", .0.display())]
    ProfilesRootMissing(PathBuf),

    /// The profiles directory exists but holds no default-release profile.
    #[error("no default Firefox profile found in: {}", .0.display())]
    NoMatchingProfile(PathBuf),

    /// The bundled stylesheet is not next to the executable.
    #[error("userChrome.css not found at: {}", .0.display())]
    SourceMissing(PathBuf),

    /// Creating the chrome directory or copying the stylesheet failed.
    #[error("error installing userChrome.css to {}: {source}", .dest.display())]
    CopyFailed {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error kind, so callers can tell failures apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::SourceMissing(_) => 2,
            Error::HomeNotFound | Error::ProfilesRootMissing(_) => 3,
            Error::NoMatchingProfile(_) => 4,
            Error::CopyFailed { .. } | Error::Io(_) => 1,
        }
    }
}
