//! Core library for fileref
//!
//! Tools routinely accept config values (certificates, keys, templates)
//! either as a path to a file or as the value itself. This crate implements
//! that resolution rule: [`path_or_contents`] decides which case an input
//! is, expanding a leading `~` against the canonical home directory, and
//! returns the file's contents or the input verbatim.
//!
//! The deciding rule is an existence probe, not a read: an entry that
//! exists but cannot be read is still classified as a path, and the read
//! failure is reported rather than falling back to the literal value.

pub mod error;
pub mod home;
pub mod logging;
pub mod resolve;

pub use error::{HomeDirError, ResolveError};
pub use resolve::{Resolved, path_or_contents};
