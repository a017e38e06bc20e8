//! CMake backend for the mortar build-descriptor generator.
//!
//! Implements the factory/generator strategy pair for CMake: one
//! `CMakeLists.txt` per generated project, plus a root `CMakeLists.txt`
//! written at finalize that pulls every registered project in with
//! `add_subdirectory`.

pub mod files;
mod factory;
mod generator;
mod project_set;

pub use factory::CMakeProjectSetFactory;
pub use generator::CMakeFileGenerator;
pub use project_set::CMakeProjectSet;
