use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::Version;

/// A constraint on the version of an external dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionConstraint {
    /// Any version is acceptable.
    Any,
    /// The resolved package must be at least this version.
    AtLeast(Version),
    /// The resolved package must be exactly this version.
    Exact(Version),
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionConstraint::Any => write!(f, "*"),
            VersionConstraint::AtLeast(v) => write!(f, ">= {}", v),
            VersionConstraint::Exact(v) => write!(f, "= {}", v),
        }
    }
}

/// A dependency on a pre-built, versioned package outside this generation
/// run. Resolved upstream; this layer only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDependency {
    name: String,
    constraint: VersionConstraint,
    /// Tool-specific package identifier, when it differs from `name`
    /// (e.g. a CMake package whose find-module name is capitalized).
    package_id: Option<String>,
}

impl ExternalDependency {
    pub fn new(name: impl Into<String>, constraint: VersionConstraint) -> Self {
        Self {
            name: name.into(),
            constraint,
            package_id: None,
        }
    }

    pub fn with_package_id(mut self, package_id: impl Into<String>) -> Self {
        self.package_id = Some(package_id.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn constraint(&self) -> VersionConstraint {
        self.constraint
    }

    /// The identifier used in the target tool's dependency declaration.
    pub fn package_id(&self) -> &str {
        self.package_id.as_deref().unwrap_or(&self.name)
    }
}

/// Where an imported package comes from, which decides how a reference to it
/// is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageOrigin {
    /// Installed on the system; rendered as a find-style declaration.
    System,
    /// Vendored under the output tree at this relative path; rendered as a
    /// subdirectory-style declaration.
    Vendored(PathBuf),
}

/// Identity of an externally imported dependency package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    name: String,
    version: Version,
    origin: PackageOrigin,
}

impl PackageInfo {
    pub fn system(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            origin: PackageOrigin::System,
        }
    }

    pub fn vendored(name: impl Into<String>, version: Version, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            version,
            origin: PackageOrigin::Vendored(path.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn origin(&self) -> &PackageOrigin {
        &self.origin
    }
}
