use std::path::PathBuf;

use mortar_model::{ParameterBundle, ProjectType};

/// Policy answering "where in the output tree does a project live".
///
/// Must be a deterministic, side-effect-free function of its inputs;
/// generators consult it per call and never cache the result across runs,
/// since the same project may be regenerated under a different bundle.
pub trait ModuleStructureStrategy {
    /// Output-root-relative directory for the project's files.
    fn project_directory(
        &self,
        bundle: &ParameterBundle,
        project_type: ProjectType,
        project_name: &str,
    ) -> PathBuf;
}

/// Every project lives in a directory named after it, directly under the
/// output root.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatLayout;

impl ModuleStructureStrategy for FlatLayout {
    fn project_directory(
        &self,
        _bundle: &ParameterBundle,
        _project_type: ProjectType,
        project_name: &str,
    ) -> PathBuf {
        PathBuf::from(project_name)
    }
}

/// Projects nest under their module path segments; test drivers get a
/// trailing `test` directory so they sit next to the code they exercise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModulePathLayout;

impl ModuleStructureStrategy for ModulePathLayout {
    fn project_directory(
        &self,
        bundle: &ParameterBundle,
        project_type: ProjectType,
        project_name: &str,
    ) -> PathBuf {
        let mut dir: PathBuf = bundle.module_path().iter().collect();
        if project_type == ProjectType::Test {
            dir.push("test");
        }
        dir.push(project_name);
        dir
    }
}
