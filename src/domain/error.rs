use std::io;

use thiserror::Error;

/// Library-wide error type for provis operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A document failed to parse.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Input or manifest content rejected by a validation rule.
    #[error("{0}")]
    Validation(String),

    /// No manifest found at the resolved location.
    #[error("No workspace.yml manifest found at {0}")]
    ManifestNotFound(String),

    /// A manifest already exists at the target location.
    #[error("workspace.yml already exists at {0} (use --force to overwrite)")]
    ManifestExists(String),

    /// Manifest failed validation; diagnostics were already emitted.
    #[error("Manifest failed validation with {errors} error(s)")]
    ManifestInvalid { errors: usize },

    /// A conda package specifier could not be parsed.
    #[error("Invalid package specifier '{spec}': {reason}")]
    InvalidPackageSpec { spec: String, reason: String },

    /// A pip source-control requirement could not be parsed.
    #[error("Invalid source requirement '{requirement}': {reason}")]
    InvalidSourceRequirement { requirement: String, reason: String },

    /// A collection mount point is unusable.
    #[error("Invalid mount point '{mount_point}': {reason}")]
    InvalidMountPoint { mount_point: String, reason: String },

    /// Unexpected internal failure (embedded assets, template rendering).
    #[error("{0}")]
    InternalError(String),
}
