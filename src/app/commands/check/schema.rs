//! Typed-parse checks: deserialize the manifest and vet field shapes.

use crate::domain::validation::validate_identifier;
use crate::domain::{MANIFEST_FILENAME, Manifest};

use super::diagnostics::Diagnostics;

/// Parse the manifest into its typed form, recording a diagnostic on
/// failure. Field-shape findings that do not block parsing land as
/// diagnostics too.
pub fn parse_manifest(content: &str, diagnostics: &mut Diagnostics) -> Option<Manifest> {
    let manifest = match Manifest::from_yaml(content) {
        Ok(manifest) => manifest,
        Err(e) => {
            diagnostics.push_error(MANIFEST_FILENAME, e.to_string());
            return None;
        }
    };

    if !validate_identifier(&manifest.project.name, true) {
        diagnostics.push_error(
            "project.name",
            format!(
                "'{}' is not a valid project name (alphanumeric plus '-', '_', '.')",
                manifest.project.name
            ),
        );
    }

    if let Some(homepage) = &manifest.project.homepage
        && !matches!(homepage.scheme(), "http" | "https")
    {
        diagnostics.push_warning(
            "project.homepage",
            format!("unusual scheme '{}' for a homepage URL", homepage.scheme()),
        );
    }

    Some(manifest)
}
