//! Domain model for workspace provisioning manifests.

mod collection;
mod dependencies;
mod error;
mod manifest;
mod package_spec;
mod project;
mod resources;
mod source_url;
pub mod validation;

pub use collection::{CollectionEntry, duplicate_mount_points};
pub use dependencies::AdditionalDependencies;
pub use error::AppError;
pub use manifest::{MANIFEST_FILENAME, Manifest, REQUIRED_SECTIONS, WorkspaceSpec, fingerprint};
pub use package_spec::{PackageSpec, VersionOp};
pub use project::Project;
pub use resources::ResourceLimits;
pub use source_url::SourceUrl;
