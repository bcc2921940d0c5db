//! Model/data collection entries: external artifacts mounted into the workspace.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// One external artifact reference: a source system, an identifier within
/// that system, and the path it is mounted at inside the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub source: String,
    pub identifier: String,
    pub mount_point: String,
}

impl CollectionEntry {
    /// Check that the mount point is an absolute path with no traversal.
    pub fn check_mount_point(&self) -> Result<(), AppError> {
        let invalid = |reason: &str| AppError::InvalidMountPoint {
            mount_point: self.mount_point.clone(),
            reason: reason.to_string(),
        };

        if self.mount_point.is_empty() {
            return Err(invalid("mount point is empty"));
        }

        let path = Path::new(&self.mount_point);
        if !path.is_absolute() {
            return Err(invalid("mount point must be an absolute path"));
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(invalid("mount point must not contain '..'"));
        }

        Ok(())
    }
}

/// Mount points that appear more than once across the given entries,
/// in first-seen order.
pub fn duplicate_mount_points<'a>(
    entries: impl IntoIterator<Item = &'a CollectionEntry>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    let mut duplicates = Vec::new();

    for entry in entries {
        if !seen.insert(entry.mount_point.as_str()) && reported.insert(entry.mount_point.as_str()) {
            duplicates.push(entry.mount_point.clone());
        }
    }

    duplicates
}
