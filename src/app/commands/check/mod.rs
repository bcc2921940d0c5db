//! Manifest validation: structure, schema, and semantic passes.

mod diagnostics;
mod schema;
mod semantic;
mod structure;

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Manifest file or directory containing `workspace.yml`.
    pub path: Option<PathBuf>,
    /// Treat warnings as failures.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub errors: usize,
    pub warnings: usize,
    pub exit_code: i32,
}

/// Run all validation passes over manifest content.
pub fn run_checks(content: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    if structure::structural_checks(content, &mut diagnostics)
        && let Some(manifest) = schema::parse_manifest(content, &mut diagnostics)
    {
        semantic::semantic_checks(&manifest, &mut diagnostics);
    }

    diagnostics
}

pub fn execute(options: CheckOptions) -> Result<CheckOutcome, AppError> {
    let manifest_path = super::resolve_manifest_path(options.path.as_deref())?;
    let content = fs::read_to_string(&manifest_path)?;

    let diagnostics = run_checks(&content);
    diagnostics.emit();

    let errors = diagnostics.error_count();
    let warnings = diagnostics.warning_count();
    let exit_code = if errors > 0 {
        1
    } else if warnings > 0 && options.strict {
        2
    } else {
        0
    };

    if errors == 0 && warnings == 0 {
        println!("All checks passed.");
    } else if errors == 0 && !options.strict {
        eprintln!("Check completed with {} warning(s).", warnings);
    } else {
        eprintln!("Check failed: {} error(s), {} warning(s) found.", errors, warnings);
    }

    Ok(CheckOutcome { errors, warnings, exit_code })
}
