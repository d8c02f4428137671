//! Canonical home directory resolution
//!
//! Single source of truth for home-directory resolution across the
//! workspace, so that `~` expansion behaves the same on Linux, macOS, and
//! Windows (where `dirs::home_dir()` uses the Windows API and ignores
//! `HOME`/`USERPROFILE`).
//!
//! # Precedence
//!
//! 1. `FILEREF_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default
//!
//! The environment override is the substitution seam: tests and custom
//! deployments point `FILEREF_HOME` at a scratch directory instead of
//! mocking the platform lookup.

use crate::error::HomeDirError;
use std::path::PathBuf;

/// Environment variable that overrides the platform home-directory lookup.
pub const HOME_ENV_VAR: &str = "FILEREF_HOME";

/// Get the home directory used for `~` expansion
///
/// Checks [`HOME_ENV_VAR`] first; a set but empty (or whitespace-only)
/// value is ignored and the platform default applies.
///
/// # Errors
///
/// Returns [`HomeDirError::Unavailable`] when no override is set and the
/// platform lookup fails.
pub fn home_dir() -> Result<PathBuf, HomeDirError> {
    if let Ok(home) = std::env::var(HOME_ENV_VAR) {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().ok_or(HomeDirError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn restore(original: Option<String>) {
        unsafe {
            match original {
                Some(v) => env::set_var(HOME_ENV_VAR, v),
                None => env::remove_var(HOME_ENV_VAR),
            }
        }
    }

    #[test]
    #[serial]
    fn override_set() {
        let original = env::var(HOME_ENV_VAR).ok();
        unsafe { env::set_var(HOME_ENV_VAR, "/custom/home") };

        assert_eq!(home_dir().unwrap(), PathBuf::from("/custom/home"));

        restore(original);
    }

    #[test]
    #[serial]
    fn override_unset_uses_platform_default() {
        let original = env::var(HOME_ENV_VAR).ok();
        unsafe { env::remove_var(HOME_ENV_VAR) };

        assert_eq!(home_dir().unwrap(), dirs::home_dir().unwrap());

        restore(original);
    }

    #[test]
    #[serial]
    fn override_empty_uses_platform_default() {
        let original = env::var(HOME_ENV_VAR).ok();
        unsafe { env::set_var(HOME_ENV_VAR, "  ") };

        assert_eq!(home_dir().unwrap(), dirs::home_dir().unwrap());

        restore(original);
    }

    #[test]
    #[serial]
    fn override_trims_surrounding_whitespace() {
        let original = env::var(HOME_ENV_VAR).ok();
        unsafe { env::set_var(HOME_ENV_VAR, "  /custom/home  ") };

        assert_eq!(home_dir().unwrap(), PathBuf::from("/custom/home"));

        restore(original);
    }
}
