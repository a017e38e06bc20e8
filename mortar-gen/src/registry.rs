use std::path::PathBuf;

use mortar_model::ProjectType;

use crate::{Error, Result};

/// Identity of a project registered into the run's aggregate: enough to let
/// later projects and the final workspace descriptor refer back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    name: String,
    directory: PathBuf,
    project_type: ProjectType,
}

impl ProjectIdentity {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        project_type: ProjectType,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            project_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output-root-relative directory holding the project's descriptor.
    pub fn directory(&self) -> &std::path::Path {
        &self.directory
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }
}

/// Lifecycle of a project set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetState {
    Empty,
    Accumulating,
    Finalized,
}

/// Append-only accumulator shared across all generator calls of one run.
///
/// Backends embed one of these and delegate the bookkeeping: registered
/// project identities in registration order, pending internal-reference
/// edges, and the `Empty → Accumulating → Finalized` lifecycle. Internal
/// references may point forward to projects not yet registered; they are
/// resolved when [`seal`](ProjectRegistry::seal) runs at finalize time.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    projects: Vec<ProjectIdentity>,
    pending_references: Vec<PendingReference>,
    finalized: bool,
}

#[derive(Debug)]
struct PendingReference {
    from: String,
    to: String,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SetState {
        if self.finalized {
            SetState::Finalized
        } else if self.projects.is_empty() {
            SetState::Empty
        } else {
            SetState::Accumulating
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Register a project. Projects cannot be removed or renamed afterwards.
    pub fn register(&mut self, project: ProjectIdentity) -> Result<()> {
        if self.finalized {
            return Err(Error::Protocol {
                operation: format!("register project '{}'", project.name()),
            });
        }
        if self.contains(project.name()) {
            return Err(Error::InvalidProject {
                project: project.name().to_string(),
                reason: "a project with this name is already registered in this run".to_string(),
            });
        }
        self.projects.push(project);
        Ok(())
    }

    /// Record an internal reference edge from one project to another.
    ///
    /// The target does not have to be registered yet; unresolved edges fail
    /// the run at [`seal`](ProjectRegistry::seal).
    pub fn record_reference(&mut self, from: &str, to: &str) -> Result<()> {
        if self.finalized {
            return Err(Error::Protocol {
                operation: format!("record reference '{}' -> '{}'", from, to),
            });
        }
        self.pending_references.push(PendingReference {
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(())
    }

    /// Recorded internal reference edges as `(from, to)` pairs, in the
    /// order they were recorded. Backends whose aggregate syntax is
    /// order-sensitive use these to sequence projects dependency-first.
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pending_references
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p.name() == name)
    }

    /// Registered projects, in registration order.
    pub fn projects(&self) -> &[ProjectIdentity] {
        &self.projects
    }

    /// Resolve all pending references and transition to `Finalized`.
    ///
    /// Sealing an empty registry is legal and yields an empty project list.
    pub fn seal(&mut self) -> Result<&[ProjectIdentity]> {
        if self.finalized {
            return Err(Error::Protocol {
                operation: "finalize the project set twice".to_string(),
            });
        }
        for reference in &self.pending_references {
            if !self.projects.iter().any(|p| p.name() == reference.to) {
                return Err(Error::ReferenceIntegrity {
                    project: reference.from.clone(),
                    target: reference.to.clone(),
                });
            }
        }
        self.finalized = true;
        Ok(&self.projects)
    }
}
