use serde::{Deserialize, Serialize};

/// The `additional_dependencies` section: everything the provisioner installs
/// on top of the base image.
///
/// Conda entries are kept as raw specifier strings so pins survive verbatim
/// into generated artifacts; they are parsed into
/// [`PackageSpec`](crate::domain::PackageSpec) only for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDependencies {
    /// Environment modules to load (`module load <name>`).
    #[serde(default)]
    pub modules: Vec<String>,
    /// Conda package specifiers, runtime pin included.
    #[serde(default)]
    pub conda: Vec<String>,
    /// Direct source-control requirements (pip VCS URLs).
    #[serde(default)]
    pub pip: Vec<String>,
}

impl AdditionalDependencies {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.conda.is_empty() && self.pip.is_empty()
    }
}
