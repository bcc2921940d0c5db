#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding, anchored to a manifest location such as
/// `project.name` or `additional_dependencies.conda[2]`.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub location: String,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            location: location.into(),
            message: message.into(),
            severity: Severity::Error,
        });
    }

    pub fn push_warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic {
            location: location.into(),
            message: message.into(),
            severity: Severity::Warning,
        });
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.location, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.location, diagnostic.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.push_error("project.name", "bad");
        diagnostics.push_warning("workspace", "odd");
        diagnostics.push_warning("workspace", "also odd");

        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(diagnostics.warning_count(), 2);
        assert!(diagnostics.has_errors());
    }
}
