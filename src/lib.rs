//! provis: Validate, inspect, and compile research-workspace provisioning
//! manifests (`workspace.yml`).

pub mod app;
pub mod domain;
pub mod services;

use std::path::{Path, PathBuf};

use app::commands::{check, export, init, show};

pub use app::commands::check::{CheckOptions, CheckOutcome, Diagnostic, Diagnostics, Severity};
pub use app::commands::export::{ExportOptions, ExportResult};
pub use app::commands::show::{ManifestSummary, ShowFormat, ShowOptions};
pub use domain::{AppError, MANIFEST_FILENAME, Manifest, PackageSpec, SourceUrl};

/// Scaffold a starter `workspace.yml` manifest.
///
/// Returns the path of the created manifest.
pub fn init(path: Option<&Path>, name: &str, force: bool) -> Result<PathBuf, AppError> {
    let manifest_path = init::execute(path, name, force)?;
    println!("✅ Created {}", manifest_path.display());
    Ok(manifest_path)
}

/// Validate a manifest and emit diagnostics.
///
/// The returned outcome carries the intended process exit code: 0 clean,
/// 1 on errors, 2 on warnings under `strict`.
pub fn check(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    check::execute(options)
}

/// Parse a manifest and print a summary in the requested format.
pub fn show(options: ShowOptions) -> Result<ManifestSummary, AppError> {
    show::execute(options)
}

/// Validate a manifest, then generate `environment.yml` and `install.sh`.
///
/// Refuses to write artifacts when validation finds errors.
pub fn export(options: ExportOptions) -> Result<ExportResult, AppError> {
    let result = export::execute(options)?;
    println!("✅ Wrote {}", result.environment_file.display());
    println!("✅ Wrote {}", result.install_script.display());
    Ok(result)
}
