//! Conda-style package specifier parsing (`python=3.10`, `numpy>=1.26`).

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;
use crate::domain::validation::validate_identifier;

/// Comparison operator in a package version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOp {
    /// `=` (conda fuzzy pin)
    Pin,
    /// `==`
    Exact,
    /// `>=`
    AtLeast,
    /// `<=`
    AtMost,
    /// `>`
    Greater,
    /// `<`
    Less,
}

impl VersionOp {
    pub fn as_str(self) -> &'static str {
        match self {
            VersionOp::Pin => "=",
            VersionOp::Exact => "==",
            VersionOp::AtLeast => ">=",
            VersionOp::AtMost => "<=",
            VersionOp::Greater => ">",
            VersionOp::Less => "<",
        }
    }
}

/// A parsed package specifier: a name plus an optional version constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub constraint: Option<(VersionOp, String)>,
}

impl PackageSpec {
    fn invalid(spec: &str, reason: impl Into<String>) -> AppError {
        AppError::InvalidPackageSpec { spec: spec.to_string(), reason: reason.into() }
    }
}

// Two-character operators must be tried before their one-character prefixes.
const OPERATORS: [(&str, VersionOp); 6] = [
    ("==", VersionOp::Exact),
    (">=", VersionOp::AtLeast),
    ("<=", VersionOp::AtMost),
    ("=", VersionOp::Pin),
    (">", VersionOp::Greater),
    ("<", VersionOp::Less),
];

fn valid_version(version: &str) -> bool {
    !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '+' | '-' | '_' | '*' | '!'))
}

impl FromStr for PackageSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if spec.is_empty() {
            return Err(Self::invalid(s, "empty specifier"));
        }

        let split = spec
            .char_indices()
            .find(|&(_, c)| matches!(c, '=' | '>' | '<'))
            .map(|(idx, _)| idx);

        let Some(idx) = split else {
            if !validate_identifier(spec, true) {
                return Err(Self::invalid(s, "package name contains invalid characters"));
            }
            return Ok(PackageSpec { name: spec.to_string(), constraint: None });
        };

        let (name, rest) = spec.split_at(idx);
        if name.is_empty() {
            return Err(Self::invalid(s, "missing package name before version constraint"));
        }
        if !validate_identifier(name, true) {
            return Err(Self::invalid(s, "package name contains invalid characters"));
        }

        let (op, version) = OPERATORS
            .iter()
            .find_map(|(token, op)| rest.strip_prefix(token).map(|version| (*op, version)))
            .ok_or_else(|| Self::invalid(s, "unrecognized version operator"))?;

        if !valid_version(version) {
            return Err(Self::invalid(s, "missing or malformed version after operator"));
        }

        Ok(PackageSpec { name: name.to_string(), constraint: Some((op, version.to_string())) })
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some((op, version)) => write!(f, "{}{}{}", self.name, op.as_str(), version),
            None => write!(f, "{}", self.name),
        }
    }
}
