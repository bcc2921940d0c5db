//! Pip-style VCS requirement parsing (`git+https://host/repo.git@rev#egg=name`).

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::domain::AppError;
use crate::domain::validation::validate_identifier;

const VCS_PREFIX: &str = "git+";
const EGG_PREFIX: &str = "egg=";
const ALLOWED_SCHEMES: [&str; 3] = ["https", "http", "ssh"];

/// A parsed direct source-control requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl {
    /// Repository URL, without the `git+` prefix, revision, or fragment.
    pub repository: Url,
    /// Optional revision after `@` (branch, tag, or commit).
    pub reference: Option<String>,
    /// Optional distribution name from the `#egg=` fragment.
    pub egg: Option<String>,
}

impl SourceUrl {
    fn invalid(requirement: &str, reason: impl Into<String>) -> AppError {
        AppError::InvalidSourceRequirement {
            requirement: requirement.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for SourceUrl {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let requirement = s.trim();
        if requirement.is_empty() {
            return Err(Self::invalid(s, "empty requirement"));
        }

        let Some(rest) = requirement.strip_prefix(VCS_PREFIX) else {
            return Err(Self::invalid(s, "missing 'git+' prefix"));
        };

        let (rest, egg) = match rest.split_once('#') {
            Some((base, fragment)) => {
                let Some(egg) = fragment.strip_prefix(EGG_PREFIX) else {
                    return Err(Self::invalid(s, "fragment must be '#egg=<name>'"));
                };
                if !validate_identifier(egg, true) {
                    return Err(Self::invalid(s, "egg name contains invalid characters"));
                }
                (base, Some(egg.to_string()))
            }
            None => (rest, None),
        };

        // An '@' after the last '/' delimits a revision; earlier '@'s belong
        // to the authority (git+ssh://git@host/...).
        let last_slash = rest.rfind('/').unwrap_or(0);
        let (base, reference) = match rest.rfind('@') {
            Some(idx) if idx > last_slash => {
                let reference = &rest[idx + 1..];
                if reference.is_empty() {
                    return Err(Self::invalid(s, "empty revision after '@'"));
                }
                (&rest[..idx], Some(reference.to_string()))
            }
            _ => (rest, None),
        };

        let repository =
            Url::parse(base).map_err(|e| Self::invalid(s, format!("bad repository URL: {}", e)))?;

        if !ALLOWED_SCHEMES.contains(&repository.scheme()) {
            return Err(Self::invalid(
                s,
                format!("unsupported scheme '{}' (expected https, http, or ssh)", repository.scheme()),
            ));
        }
        if repository.host_str().is_none() {
            return Err(Self::invalid(s, "repository URL has no host"));
        }

        Ok(SourceUrl { repository, reference, egg })
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", VCS_PREFIX, self.repository)?;
        if let Some(reference) = &self.reference {
            write!(f, "@{}", reference)?;
        }
        if let Some(egg) = &self.egg {
            write!(f, "#{}{}", EGG_PREFIX, egg)?;
        }
        Ok(())
    }
}
