//! Backend strategy abstraction and shared generation machinery for mortar.
//!
//! This crate defines everything the per-tool backend crates implement or
//! consume: the factory/generator strategy pair, the run-scoped project set
//! with its lifecycle state machine, the module structure strategy, file
//! system access with atomic writes, and the error taxonomy of the
//! generation layer.
//!
//! # Module Organization
//!
//! - [`error`](Error) - the closed error taxonomy shared by all backends
//! - [`ProjectSetFactory`] / [`ProjectSet`] - the per-tool strategy pair
//! - [`ProjectRegistry`] - append-only accumulator backends embed
//! - [`GenerationRun`] - the orchestration seam, one project set per run
//! - [`ScriptBuilder`] - indentation-aware build-script rendering
//! - [`testing`] - test utilities (feature-gated)

mod error;
mod factory;
mod file;
mod fs;
mod layout;
mod project_set;
mod registry;
mod run;
mod script;
mod versions;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use factory::{GenerateRequest, ProjectSetFactory};
pub use file::{BuildFile, GENERATED_HEADER};
pub use fs::{DiskFileSystem, FileSystemAccess, slash_path};
pub use layout::{FlatLayout, ModulePathLayout, ModuleStructureStrategy};
pub use project_set::{FinalizeContext, FinalizeSummary, ProjectSet};
pub use registry::{ProjectIdentity, ProjectRegistry, SetState};
pub use run::{GenerationRun, ProjectInput};
pub use script::{Indent, ScriptBuilder};
pub use versions::{BuildTool, FixedVersionProvider, TargetVersionProvider};
