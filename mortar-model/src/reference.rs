use serde::{Deserialize, Serialize};

use crate::ExternalDependency;

/// How a reference participates in the consuming project's build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkScope {
    /// Needed to build the project, not propagated to consumers.
    Build,
    /// Linked into the project and propagated to consumers.
    Link,
    /// Interface-only: propagated to consumers without being built here.
    Interface,
}

/// A dependency on another project generated in the same run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalReference {
    project: String,
    scope: LinkScope,
}

impl InternalReference {
    pub fn new(project: impl Into<String>, scope: LinkScope) -> Self {
        Self {
            project: project.into(),
            scope,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn scope(&self) -> LinkScope {
        self.scope
    }
}

/// A project's outgoing dependency edge, created by the orchestration layer
/// and consumed read-only by backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectReference {
    /// A pre-built, versioned package outside this run.
    External(ExternalDependency),
    /// Another project generated in the same run.
    Internal(InternalReference),
}
