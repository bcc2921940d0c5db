//! Workspace provisioning manifest: the root document type.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{AdditionalDependencies, AppError, CollectionEntry, Project, ResourceLimits};

/// The filename of the provisioning manifest.
pub const MANIFEST_FILENAME: &str = "workspace.yml";

/// Top-level keys every manifest must carry.
pub const REQUIRED_SECTIONS: [&str; 3] = ["project", "workspace", "additional_dependencies"];

/// A parsed `workspace.yml`: project identity, workspace requirements, and
/// the dependencies to install on top of the base environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub project: Project,
    pub workspace: WorkspaceSpec,
    pub additional_dependencies: AdditionalDependencies,
}

/// Workspace requirements: resource minimums plus the model and data
/// artifacts mounted into the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSpec {
    pub resources: ResourceLimits,
    #[serde(default)]
    pub model_collection: Vec<CollectionEntry>,
    #[serde(default)]
    pub data_collection: Vec<CollectionEntry>,
}

impl Manifest {
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::ParseError {
            what: MANIFEST_FILENAME.into(),
            details: e.to_string(),
        })
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| {
            AppError::InternalError(format!("Failed to serialize manifest: {}", e))
        })
    }

    /// All collection entries, model mounts first, in manifest order.
    pub fn collection_entries(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.workspace.model_collection.iter().chain(self.workspace.data_collection.iter())
    }
}

/// Hex-encoded sha256 of the raw manifest content; stamped into generated
/// artifacts so staleness is detectable.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "\
project:
  name: cerebrum
workspace:
  resources:
    min_cpu: 2
    min_mem: 4096
additional_dependencies:
  conda:
    - python=3.10
";

    #[test]
    fn parses_minimal_manifest() {
        let manifest = Manifest::from_yaml(MINIMAL).unwrap();
        assert_eq!(manifest.project.name, "cerebrum");
        assert_eq!(manifest.workspace.resources.min_cpu, 2);
        assert!(manifest.workspace.model_collection.is_empty());
        assert_eq!(manifest.additional_dependencies.conda, vec!["python=3.10".to_string()]);
    }

    #[test]
    fn missing_section_fails_parse() {
        let err = Manifest::from_yaml("project:\n  name: cerebrum\n").unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
    }

    #[test]
    fn yaml_round_trip_preserves_collections() {
        let mut manifest = Manifest::from_yaml(MINIMAL).unwrap();
        manifest.workspace.model_collection.push(CollectionEntry {
            source: "cybershuttle".into(),
            identifier: "mouse-v1-2024".into(),
            mount_point: "/models/mouse-v1".into(),
        });

        let reparsed = Manifest::from_yaml(&manifest.to_yaml().unwrap()).unwrap();
        assert_eq!(reparsed.workspace.model_collection, manifest.workspace.model_collection);
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        // echo -n "hello world" | shasum -a 256
        assert_eq!(
            fingerprint("hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }
}
