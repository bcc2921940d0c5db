//! Export command: lower a manifest into installer artifacts.
//!
//! Generates `environment.yml` (conda environment) and `install.sh` (module
//! loads plus environment creation), each stamped with the generation time
//! and the manifest's sha256 so stale artifacts are detectable.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use minijinja::context;

use crate::domain::{AppError, Manifest, fingerprint};
use crate::services::{assets, renderer};

use super::check::run_checks;

pub const ENVIRONMENT_FILENAME: &str = "environment.yml";
pub const INSTALL_SCRIPT_FILENAME: &str = "install.sh";

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Manifest file or directory containing `workspace.yml`.
    pub path: Option<PathBuf>,
    /// Output directory; defaults to the manifest's directory.
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub environment_file: PathBuf,
    pub install_script: PathBuf,
    pub conda_packages: usize,
    pub pip_requirements: usize,
    pub modules: usize,
}

pub fn execute(options: ExportOptions) -> Result<ExportResult, AppError> {
    let manifest_path = super::resolve_manifest_path(options.path.as_deref())?;
    let content = fs::read_to_string(&manifest_path)?;

    let diagnostics = run_checks(&content);
    if diagnostics.has_errors() {
        diagnostics.emit();
        return Err(AppError::ManifestInvalid { errors: diagnostics.error_count() });
    }

    let manifest = Manifest::from_yaml(&content)?;

    let out_dir = match options.out_dir {
        Some(dir) => dir,
        None => manifest_path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
    };
    fs::create_dir_all(&out_dir)?;

    let digest = fingerprint(&content);
    let generated_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let env = renderer::build_template_environment()?;

    let environment_content = renderer::render_template_by_name(
        &env,
        assets::ENVIRONMENT_TEMPLATE,
        &context! {
            name => &manifest.project.name,
            conda => &manifest.additional_dependencies.conda,
            pip => &manifest.additional_dependencies.pip,
            fingerprint => &digest,
            generated_at => &generated_at,
        },
    )?;
    let environment_file = out_dir.join(ENVIRONMENT_FILENAME);
    fs::write(&environment_file, &environment_content)?;

    let script_content = renderer::render_template_by_name(
        &env,
        assets::INSTALL_TEMPLATE,
        &context! {
            name => &manifest.project.name,
            modules => &manifest.additional_dependencies.modules,
            environment_file => ENVIRONMENT_FILENAME,
            fingerprint => &digest,
            generated_at => &generated_at,
        },
    )?;
    let install_script = out_dir.join(INSTALL_SCRIPT_FILENAME);
    fs::write(&install_script, &script_content)?;

    // Installer must be directly runnable (Unix only).
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&install_script)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&install_script, perms)?;
    }

    Ok(ExportResult {
        environment_file,
        install_script,
        conda_packages: manifest.additional_dependencies.conda.len(),
        pip_requirements: manifest.additional_dependencies.pip.len(),
        modules: manifest.additional_dependencies.modules.len(),
    })
}
