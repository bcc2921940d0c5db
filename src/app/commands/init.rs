//! Init command: scaffold a starter `workspace.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::context;

use crate::domain::{AppError, MANIFEST_FILENAME};
use crate::domain::validation::validate_identifier;
use crate::services::{assets, renderer};

pub fn execute(path: Option<&Path>, name: &str, force: bool) -> Result<PathBuf, AppError> {
    if !validate_identifier(name, true) {
        return Err(AppError::Validation(format!(
            "Invalid project name '{}': must be alphanumeric with hyphens, underscores, or periods",
            name
        )));
    }

    let target = match path {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let manifest_path = target.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !force {
        return Err(AppError::ManifestExists(manifest_path.display().to_string()));
    }

    let env = renderer::build_template_environment()?;
    let content = renderer::render_template_by_name(
        &env,
        assets::WORKSPACE_TEMPLATE,
        &context! { name => name },
    )?;

    fs::create_dir_all(&target)?;
    fs::write(&manifest_path, content)?;

    Ok(manifest_path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::app::commands::check::run_checks;
    use crate::domain::Manifest;

    use super::*;

    #[test]
    fn writes_starter_manifest() {
        let temp = tempdir().unwrap();

        let manifest_path = execute(Some(temp.path()), "cerebrum", false).unwrap();

        let content = fs::read_to_string(&manifest_path).unwrap();
        let manifest = Manifest::from_yaml(&content).unwrap();
        assert_eq!(manifest.project.name, "cerebrum");
    }

    #[test]
    fn starter_manifest_passes_checks() {
        let temp = tempdir().unwrap();

        let manifest_path = execute(Some(temp.path()), "cerebrum", false).unwrap();

        let diagnostics = run_checks(&fs::read_to_string(&manifest_path).unwrap());
        assert_eq!(diagnostics.error_count(), 0);
        assert_eq!(diagnostics.warning_count(), 0);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = tempdir().unwrap();
        execute(Some(temp.path()), "cerebrum", false).unwrap();

        let result = execute(Some(temp.path()), "cerebrum", false);
        assert!(matches!(result, Err(AppError::ManifestExists(_))));

        assert!(execute(Some(temp.path()), "cerebrum", true).is_ok());
    }

    #[test]
    fn rejects_invalid_project_name() {
        let temp = tempdir().unwrap();
        let result = execute(Some(temp.path()), "bad name", false);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
