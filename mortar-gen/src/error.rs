use std::path::PathBuf;

use miette::Diagnostic;
use mortar_model::Version;
use thiserror::Error;

use crate::BuildTool;

/// Result type for generation-layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The closed error taxonomy of the build-descriptor generation layer.
///
/// None of these are transient: every variant is a deterministic
/// input-validation or protocol failure, surfaced to the caller of the
/// per-project generation call and never downgraded to a warning. The run
/// aborts on the first error; earlier projects' descriptors remain on disk
/// since each write is independently atomic.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot write descriptor at '{path}'")]
    #[diagnostic(
        code(mortar::file_system),
        help("the project path must be a writable directory, not an existing file")
    )]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("project '{project}': external dependency '{dependency}' has no imported package info")]
    #[diagnostic(
        code(mortar::dependency_resolution),
        help("import the package (system or vendored) before generating, or drop the dependency")
    )]
    DependencyResolution { project: String, dependency: String },

    #[error("project '{project}': reference to unknown project '{target}'")]
    #[diagnostic(
        code(mortar::reference_integrity),
        help("every internal reference must name a project registered in the same run")
    )]
    ReferenceIntegrity { project: String, target: String },

    #[error("{tool} {version} is not supported by this backend (requires {required})")]
    #[diagnostic(code(mortar::unsupported_version))]
    UnsupportedVersion {
        tool: BuildTool,
        version: Version,
        required: String,
    },

    #[error("project set is already finalized; cannot {operation}")]
    #[diagnostic(
        code(mortar::protocol),
        help("a project set accepts registrations only before finalize; this is a caller bug")
    )]
    Protocol { operation: String },

    #[error("project '{project}': {reason}")]
    #[diagnostic(code(mortar::invalid_project))]
    InvalidProject { project: String, reason: String },
}
