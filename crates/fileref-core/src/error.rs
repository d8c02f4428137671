//! Error types for path-or-contents resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving the caller's home directory
#[derive(Error, Debug)]
pub enum HomeDirError {
    /// Neither `FILEREF_HOME` nor the platform lookup produced a home directory
    #[error("Could not determine home directory")]
    Unavailable,

    /// A `~name/...` input asked for another user's home directory, which
    /// would require a user-database lookup
    #[error("Cannot expand user-specific home directory in {input:?}")]
    UserSpecific { input: String },
}

/// Errors raised by [`path_or_contents`](crate::resolve::path_or_contents)
#[derive(Error, Debug)]
pub enum ResolveError {
    /// `~` expansion failed before any filesystem access
    #[error(transparent)]
    HomeDir(#[from] HomeDirError),

    /// An entry exists at `path` but its contents could not be read
    ///
    /// Only raised for inputs that named an existing entry. A missing entry
    /// is not an error; it selects the literal branch instead.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
