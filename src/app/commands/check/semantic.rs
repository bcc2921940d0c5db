//! Semantic checks over the typed manifest.

use std::collections::BTreeSet;

use crate::domain::validation::{validate_identifier, validate_module_name};
use crate::domain::{
    AdditionalDependencies, CollectionEntry, Manifest, PackageSpec, Project, ResourceLimits,
    SourceUrl, duplicate_mount_points,
};

use super::diagnostics::Diagnostics;

pub fn semantic_checks(manifest: &Manifest, diagnostics: &mut Diagnostics) {
    project_checks(&manifest.project, diagnostics);
    resource_checks(&manifest.workspace.resources, diagnostics);
    let workspace = &manifest.workspace;
    collection_checks("workspace.model_collection", &workspace.model_collection, diagnostics);
    collection_checks("workspace.data_collection", &workspace.data_collection, diagnostics);
    mount_uniqueness_checks(manifest, diagnostics);
    dependency_checks(&manifest.additional_dependencies, diagnostics);
}

fn project_checks(project: &Project, diagnostics: &mut Diagnostics) {
    for (idx, tag) in project.tags.iter().enumerate() {
        if !validate_identifier(tag, true) {
            diagnostics.push_error(
                format!("project.tags[{}]", idx),
                format!("'{}' is not a valid tag", tag),
            );
        }
    }

    for (idx, author) in project.authors.iter().enumerate() {
        if !author.contains('@') {
            diagnostics.push_warning(
                format!("project.authors[{}]", idx),
                format!("'{}' does not look like a contact identifier", author),
            );
        }
    }
}

fn resource_checks(resources: &ResourceLimits, diagnostics: &mut Diagnostics) {
    if resources.min_cpu == 0 {
        diagnostics.push_warning(
            "workspace.resources.min_cpu",
            "no CPU cores requested; the workspace gets no guaranteed compute",
        );
    }
    if resources.min_mem == 0 {
        diagnostics.push_warning(
            "workspace.resources.min_mem",
            "no memory requested; the workspace gets no guaranteed memory",
        );
    }
    if resources.min_gpu > 0 && resources.min_gpu_mem == 0 {
        diagnostics.push_warning(
            "workspace.resources.min_gpu_mem",
            "GPUs requested without any GPU memory floor",
        );
    }
    if resources.min_gpu == 0 && resources.min_gpu_mem > 0 {
        diagnostics.push_warning(
            "workspace.resources.min_gpu",
            "GPU memory requested but no GPU devices",
        );
    }
}

fn collection_checks(section: &str, entries: &[CollectionEntry], diagnostics: &mut Diagnostics) {
    for (idx, entry) in entries.iter().enumerate() {
        let location = format!("{}[{}]", section, idx);

        if !validate_identifier(&entry.source, true) {
            diagnostics
                .push_error(&location, format!("'{}' is not a valid source system", entry.source));
        }
        if !validate_identifier(&entry.identifier, true) {
            diagnostics.push_error(
                &location,
                format!("'{}' is not a valid source identifier", entry.identifier),
            );
        }
        if let Err(e) = entry.check_mount_point() {
            diagnostics.push_error(&location, e.to_string());
        }
    }
}

fn mount_uniqueness_checks(manifest: &Manifest, diagnostics: &mut Diagnostics) {
    for mount_point in duplicate_mount_points(manifest.collection_entries()) {
        diagnostics.push_error(
            "workspace",
            format!("mount point '{}' is used by more than one collection entry", mount_point),
        );
    }
}

fn dependency_checks(deps: &AdditionalDependencies, diagnostics: &mut Diagnostics) {
    let mut module_names = BTreeSet::new();
    for (idx, module) in deps.modules.iter().enumerate() {
        let location = format!("additional_dependencies.modules[{}]", idx);
        if !validate_module_name(module) {
            diagnostics.push_error(location, format!("'{}' is not a valid module name", module));
        } else if !module_names.insert(module.as_str()) {
            diagnostics.push_warning(location, format!("module '{}' listed more than once", module));
        }
    }

    if deps.conda.is_empty() {
        diagnostics.push_warning(
            "additional_dependencies.conda",
            "no packages listed; the provisioned environment will be empty",
        );
    }

    let mut package_names = BTreeSet::new();
    for (idx, entry) in deps.conda.iter().enumerate() {
        let location = format!("additional_dependencies.conda[{}]", idx);
        match entry.parse::<PackageSpec>() {
            Ok(spec) => {
                if !package_names.insert(spec.name.clone()) {
                    diagnostics.push_warning(
                        location,
                        format!("package '{}' listed more than once", spec.name),
                    );
                }
            }
            Err(e) => diagnostics.push_error(location, e.to_string()),
        }
    }

    for (idx, requirement) in deps.pip.iter().enumerate() {
        if let Err(e) = requirement.parse::<SourceUrl>() {
            diagnostics
                .push_error(format!("additional_dependencies.pip[{}]", idx), e.to_string());
        }
    }
}
