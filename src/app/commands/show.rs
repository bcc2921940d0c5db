//! Show command: summarize a manifest in text or JSON form.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{AppError, Manifest, ResourceLimits, fingerprint};

#[derive(Debug, Clone, Copy, Default)]
pub enum ShowFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub path: Option<PathBuf>,
    pub format: ShowFormat,
}

/// Machine-readable manifest summary.
#[derive(Debug, Serialize)]
pub struct ManifestSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub resources: ResourceLimits,
    pub model_mounts: usize,
    pub data_mounts: usize,
    pub modules: usize,
    pub conda_packages: usize,
    pub pip_requirements: usize,
    pub fingerprint: String,
}

impl ManifestSummary {
    pub fn from_manifest(manifest: &Manifest, content: &str) -> Self {
        Self {
            name: manifest.project.name.clone(),
            description: manifest.project.description.clone(),
            homepage: manifest.project.homepage.as_ref().map(|url| url.to_string()),
            authors: manifest.project.authors.clone(),
            tags: manifest.project.tags.clone(),
            resources: manifest.workspace.resources,
            model_mounts: manifest.workspace.model_collection.len(),
            data_mounts: manifest.workspace.data_collection.len(),
            modules: manifest.additional_dependencies.modules.len(),
            conda_packages: manifest.additional_dependencies.conda.len(),
            pip_requirements: manifest.additional_dependencies.pip.len(),
            fingerprint: fingerprint(content),
        }
    }
}

pub fn execute(options: ShowOptions) -> Result<ManifestSummary, AppError> {
    let manifest_path = super::resolve_manifest_path(options.path.as_deref())?;
    let content = fs::read_to_string(&manifest_path)?;
    let manifest = Manifest::from_yaml(&content)?;
    let summary = ManifestSummary::from_manifest(&manifest, &content);

    match options.format {
        ShowFormat::Text => print_text(&summary),
        ShowFormat::Json => {
            let rendered = serde_json::to_string_pretty(&summary).map_err(|e| {
                AppError::InternalError(format!("Failed to serialize summary: {}", e))
            })?;
            println!("{}", rendered);
        }
    }

    Ok(summary)
}

fn print_text(summary: &ManifestSummary) {
    println!("Project:   {}", summary.name);
    if let Some(description) = &summary.description {
        println!("About:     {}", description);
    }
    if let Some(homepage) = &summary.homepage {
        println!("Homepage:  {}", homepage);
    }
    if !summary.authors.is_empty() {
        println!("Authors:   {}", summary.authors.join(", "));
    }
    if !summary.tags.is_empty() {
        println!("Tags:      {}", summary.tags.join(", "));
    }
    println!(
        "Resources: {} CPU, {} GPU, {} MiB RAM, {} MiB GPU RAM (minimums)",
        summary.resources.min_cpu,
        summary.resources.min_gpu,
        summary.resources.min_mem,
        summary.resources.min_gpu_mem
    );
    println!("Mounts:    {} model, {} data", summary.model_mounts, summary.data_mounts);
    println!(
        "Installs:  {} module(s), {} conda package(s), {} pip requirement(s)",
        summary.modules, summary.conda_packages, summary.pip_requirements
    );
    println!("Digest:    sha256:{}", summary.fingerprint);
}
