use std::path::{Path, PathBuf};

use crate::{
    BuildTool, FileSystemAccess, ProjectIdentity, Result, TargetVersionProvider,
};

/// Context for writing the run's aggregate descriptor.
pub struct FinalizeContext<'a> {
    /// Name of the top-level workspace/solution artifact.
    pub workspace_name: &'a str,
    /// Root directory the whole run generates into.
    pub output_root: &'a Path,
    /// Version provider for tool-version-specific aggregate syntax.
    pub versions: &'a dyn TargetVersionProvider,
}

/// What finalize produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeSummary {
    /// Path of the written aggregate descriptor.
    pub descriptor: PathBuf,
    /// Number of projects the aggregate enumerates.
    pub project_count: usize,
}

/// The run-scoped, tool-specific aggregate of all generated projects.
///
/// One instance exists per generation run, created by the backend's factory
/// and mutated once per project by its generator. Registration is
/// append-only; after [`finalize`](ProjectSet::finalize) has written the
/// aggregate descriptor, every further mutation fails with
/// [`Error::Protocol`](crate::Error::Protocol).
pub trait ProjectSet {
    fn tool(&self) -> BuildTool;

    /// Add a generated project's identity to the aggregate.
    fn register(&mut self, project: ProjectIdentity) -> Result<()>;

    /// Record an internal reference edge; the target may be registered
    /// later in the same run.
    fn record_reference(&mut self, from: &str, to: &str) -> Result<()>;

    fn contains(&self, name: &str) -> bool;

    /// Registered projects in registration order.
    fn projects(&self) -> &[ProjectIdentity];

    fn is_finalized(&self) -> bool;

    /// Resolve pending references and write the aggregate descriptor.
    ///
    /// Runs exactly once; finalizing an empty set writes a minimal aggregate
    /// with no project entries.
    fn finalize(
        &mut self,
        fsa: &dyn FileSystemAccess,
        ctx: &FinalizeContext<'_>,
    ) -> Result<FinalizeSummary>;
}
