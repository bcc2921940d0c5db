/// Whether a string is usable as a manifest identifier (project names,
/// tags, source systems, package names).
///
/// Identifiers must be non-empty, contain no path separators, and must not
/// be the relative-path components "." or "..". Beyond that they are
/// alphanumeric plus '-' and '_', with '.' accepted only where the caller
/// allows dotted names (versioned tags, package names).
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || (allow_dots && c == '.'))
}

/// Validates an environment-module name such as `cuda/12.2` or `openmpi`.
///
/// Module names may carry a single version segment after '/'; each segment
/// must itself be a valid dotted identifier.
pub fn validate_module_name(name: &str) -> bool {
    let segments: Vec<&str> = name.split('/').collect();
    if segments.is_empty() || segments.len() > 2 {
        return false;
    }
    segments.iter().all(|segment| validate_identifier(segment, true))
}
