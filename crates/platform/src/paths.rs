//! Cross-platform path helpers

use crate::error::PlatformError;
use std::env;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Resolve a path to its canonical, absolute form
///
/// Follows symlinks and collapses `.`/`..` segments using the host's
/// native resolution rules. Fails when any component of the path does
/// not exist.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> Result<PathBuf, PlatformError> {
    let path = path.as_ref();
    dunce::canonicalize(path).map_err(|source| PlatformError::Resolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a path with forward-slash separators regardless of host
///
/// Purely textual: the path is neither resolved nor checked for
/// existence.
pub fn to_posix_path<P: AsRef<Path>>(path: P) -> String {
    let raw = path.as_ref().to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        raw.into_owned()
    } else {
        raw.replace(MAIN_SEPARATOR, "/")
    }
}

/// Create a directory and any missing ancestors
///
/// Idempotent: succeeds silently when the directory already exists.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<PathBuf, PlatformError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| PlatformError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// The current user's home directory
pub fn home_dir() -> Result<PathBuf, PlatformError> {
    dirs::home_dir().ok_or(PlatformError::NoHomeDirectory)
}

/// The system temporary directory
pub fn temp_dir() -> PathBuf {
    env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn normalize_resolves_dot_segments() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("a")).unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let resolved = normalize_path(temp.path().join("a/../b")).unwrap();
        assert_eq!(resolved, normalize_path(temp.path().join("b")).unwrap());
        assert!(resolved.is_absolute());
    }

    #[test]
    fn normalize_propagates_missing_component() {
        let temp = TempDir::new().unwrap();
        let result = normalize_path(temp.path().join("does-not-exist"));
        assert!(matches!(result, Err(PlatformError::Resolve { .. })));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("dir");

        let first = ensure_dir(&target).unwrap();
        assert!(first.is_dir());

        // Second call must not error and the directory must survive
        let second = ensure_dir(&target).unwrap();
        assert_eq!(first, second);
        assert!(target.is_dir());
    }

    #[test]
    fn ensure_dir_rejects_file_conflict() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, b"x").unwrap();

        let result = ensure_dir(&file);
        assert!(matches!(result, Err(PlatformError::CreateDir { .. })));
    }

    #[test]
    fn posix_path_round_trips_safe_components() {
        let original = Path::new("a/b/c.txt");
        let posix = to_posix_path(original);
        assert_eq!(PathBuf::from(&posix), original);
        assert!(!posix.contains('\\'));
    }

    #[test]
    fn temp_dir_exists() {
        assert!(temp_dir().is_dir());
    }

    #[test]
    fn home_dir_resolves_when_env_has_one() {
        // CI containers occasionally run without a home directory
        let home = home_dir();
        assert!(home.is_ok() || std::env::var_os("HOME").is_none());
    }
}
