//! Embedded template assets.

use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Starter manifest written by `provis init`.
pub const WORKSPACE_TEMPLATE: &str = "workspace.yml.j2";
/// Conda environment file generated by `provis export`.
pub const ENVIRONMENT_TEMPLATE: &str = "environment.yml.j2";
/// Installer script generated by `provis export`.
pub const INSTALL_TEMPLATE: &str = "install.sh.j2";

pub const ALL_TEMPLATES: [&str; 3] =
    [WORKSPACE_TEMPLATE, ENVIRONMENT_TEMPLATE, INSTALL_TEMPLATE];

pub fn template_content(name: &str) -> Result<&'static str, AppError> {
    TEMPLATE_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::InternalError(format!("Missing embedded template: {}", name)))
}
