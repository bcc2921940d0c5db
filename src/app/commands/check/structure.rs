//! Raw-YAML structural checks, run before the typed parse.

use serde_yaml::Value;

use crate::domain::{MANIFEST_FILENAME, REQUIRED_SECTIONS};

use super::diagnostics::Diagnostics;

/// Check that the content is a YAML mapping carrying the required top-level
/// sections. Returns false when the document is unusable and later passes
/// should be skipped.
pub fn structural_checks(content: &str, diagnostics: &mut Diagnostics) -> bool {
    let value: Value = match serde_yaml::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            diagnostics.push_error(MANIFEST_FILENAME, format!("not valid YAML: {}", e));
            return false;
        }
    };

    let Value::Mapping(map) = value else {
        diagnostics.push_error(MANIFEST_FILENAME, "document root must be a mapping");
        return false;
    };

    let mut complete = true;
    for section in REQUIRED_SECTIONS {
        if !map.contains_key(Value::String(section.to_string())) {
            diagnostics
                .push_error(MANIFEST_FILENAME, format!("missing required section '{}'", section));
            complete = false;
        }
    }

    // The provisioning tool owns the authoritative schema; unfamiliar
    // sections are worth flagging but must not hard-fail local validation.
    for key in map.keys() {
        match key.as_str() {
            Some(name) if REQUIRED_SECTIONS.contains(&name) => {}
            Some(name) => {
                diagnostics.push_warning(MANIFEST_FILENAME, format!("unknown section '{}'", name));
            }
            None => {
                diagnostics.push_error(MANIFEST_FILENAME, "section keys must be strings");
                complete = false;
            }
        }
    }

    complete
}
