use serde::{Deserialize, Serialize};
use url::Url;

/// Project identity section of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name; must be a valid identifier.
    pub name: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project homepage; must parse as a URL when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<Url>,
    /// Contact identifiers for the project authors.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Free-form classification tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let project: Project = serde_yaml::from_str("name: cerebrum").unwrap();
        assert_eq!(project.name, "cerebrum");
        assert!(project.description.is_none());
        assert!(project.homepage.is_none());
        assert!(project.authors.is_empty());
        assert!(project.tags.is_empty());
    }

    #[test]
    fn rejects_malformed_homepage() {
        let result: Result<Project, _> =
            serde_yaml::from_str("name: cerebrum\nhomepage: not-a-url");
        assert!(result.is_err());
    }
}
