pub mod check;
pub mod export;
pub mod init;
pub mod show;

use std::path::{Path, PathBuf};

use crate::domain::{AppError, MANIFEST_FILENAME};

/// Resolve the manifest location from an optional path argument.
///
/// A directory resolves to `<dir>/workspace.yml`; a file path is used as
/// given; no argument means the current directory.
pub(crate) fn resolve_manifest_path(path: Option<&Path>) -> Result<PathBuf, AppError> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let manifest_path = if target.is_dir() { target.join(MANIFEST_FILENAME) } else { target };

    if !manifest_path.is_file() {
        return Err(AppError::ManifestNotFound(manifest_path.display().to_string()));
    }

    Ok(manifest_path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn directory_resolves_to_manifest_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILENAME), "project: {}\n").unwrap();

        let resolved = resolve_manifest_path(Some(temp.path())).unwrap();
        assert_eq!(resolved, temp.path().join(MANIFEST_FILENAME));
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp = tempdir().unwrap();
        let result = resolve_manifest_path(Some(temp.path()));
        assert!(matches!(result, Err(AppError::ManifestNotFound(_))));
    }

    #[test]
    fn explicit_file_path_is_used_as_given() {
        let temp = tempdir().unwrap();
        let custom = temp.path().join("other.yml");
        std::fs::write(&custom, "project: {}\n").unwrap();

        let resolved = resolve_manifest_path(Some(&custom)).unwrap();
        assert_eq!(resolved, custom);
    }
}
