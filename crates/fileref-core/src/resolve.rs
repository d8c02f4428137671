//! Path-or-contents resolution
//!
//! [`path_or_contents`] decides whether an input string names an existing
//! file (after `~` expansion) and returns either the file's contents or the
//! input itself as a literal value.

use crate::error::{HomeDirError, ResolveError};
use crate::home;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Outcome of resolving an input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The input named an existing file; the payload is the file's contents
    FileContents(String),

    /// No entry existed at the input's location; the payload is the
    /// original input, unexpanded
    Literal(String),
}

impl Resolved {
    /// True when the input was treated as a filesystem path
    pub fn was_path(&self) -> bool {
        matches!(self, Resolved::FileContents(_))
    }

    /// The resolved textual value
    pub fn contents(&self) -> &str {
        match self {
            Resolved::FileContents(c) | Resolved::Literal(c) => c,
        }
    }

    /// Consume the resolution, returning the textual value
    pub fn into_contents(self) -> String {
        match self {
            Resolved::FileContents(c) | Resolved::Literal(c) => c,
        }
    }
}

/// Resolve `input` as either a file path or literal contents
///
/// A leading `~` segment is expanded to the caller's home directory first
/// (see [`crate::home`]). If an entry exists at the expanded location the
/// file is read whole; otherwise the original input is returned verbatim,
/// including any leading `~`.
///
/// The existence probe is a metadata query, so an entry the caller cannot
/// read still counts as existing: the failed read is reported instead of
/// silently degrading to the literal value.
///
/// # Errors
///
/// - [`ResolveError::HomeDir`] when the input starts with `~` and the home
///   directory cannot be determined.
/// - [`ResolveError::Read`] when an entry exists but reading it fails
///   (permissions, I/O failure, non-UTF-8 contents). Never retried.
///
/// A missing entry is not an error; `path_or_contents("no/such/file")`
/// returns `Ok(Resolved::Literal(..))`.
pub fn path_or_contents(input: &str) -> Result<Resolved, ResolveError> {
    let expanded = expand_home(input)?;

    match fs::metadata(&expanded) {
        Ok(_) => match fs::read_to_string(&expanded) {
            Ok(contents) => {
                debug!(path = %expanded.display(), "resolved input to file contents");
                Ok(Resolved::FileContents(contents))
            }
            Err(source) => Err(ResolveError::Read {
                path: expanded,
                source,
            }),
        },
        // Not-found and every other probe failure select the literal
        // branch; an ambiguous filesystem error must not block a literal
        // value.
        Err(err) => {
            trace!(error = %err, "no entry at input location, treating input as literal");
            Ok(Resolved::Literal(input.to_string()))
        }
    }
}

/// Expand a leading `~` segment to the caller's home directory
///
/// `~` alone and `~/rest` (or `~\rest`) expand; `~name/rest` is rejected
/// because resolving another user's home requires a user-database lookup.
/// Inputs without a leading `~` pass through untouched.
fn expand_home(input: &str) -> Result<PathBuf, HomeDirError> {
    let Some(rest) = input.strip_prefix('~') else {
        return Ok(PathBuf::from(input));
    };

    if rest.is_empty() {
        return home::home_dir();
    }

    if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        return Ok(home::home_dir()?.join(tail));
    }

    Err(HomeDirError::UserSpecific {
        input: input.to_string(),
    })
}
