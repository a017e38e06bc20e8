//! Tool-agnostic project model for the mortar build-descriptor generator.
//!
//! This crate defines the value objects a generation run is described with:
//! project kinds, dependency references, per-project file sets and the
//! immutable parameter bundle threaded through every generator call. Nothing
//! in here knows about any concrete build tool's syntax.

mod bundle;
mod dependency;
mod file_set;
mod project_type;
mod reference;
mod version;

pub use bundle::{CppStandard, ParameterBundle};
pub use dependency::{ExternalDependency, PackageInfo, PackageOrigin, VersionConstraint};
pub use file_set::{FileRole, ProjectFileSet};
pub use project_type::{ArtifactKind, ProjectType};
pub use reference::{InternalReference, LinkScope, ProjectReference};
pub use version::Version;
