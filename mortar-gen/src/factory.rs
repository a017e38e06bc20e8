use std::path::Path;

use mortar_model::{
    ExternalDependency, PackageInfo, ParameterBundle, ProjectFileSet, ProjectReference,
    ProjectType,
};

use crate::{
    BuildTool, FileSystemAccess, ModuleStructureStrategy, ProjectSet, Result,
    TargetVersionProvider,
};

/// Everything one per-project generation call needs.
///
/// Collections may be empty, meaning "no dependencies"; none of the fields
/// are optional. The shared project set travels separately as the one
/// mutable collaborator.
pub struct GenerateRequest<'a> {
    pub fsa: &'a dyn FileSystemAccess,
    pub layout: &'a dyn ModuleStructureStrategy,
    pub versions: &'a dyn TargetVersionProvider,
    pub bundle: &'a ParameterBundle,
    pub external_dependencies: &'a [ExternalDependency],
    pub imported_packages: &'a [PackageInfo],
    pub references: &'a [ProjectReference],
    pub file_set: &'a ProjectFileSet,
    pub project_type: ProjectType,
    pub output_root: &'a Path,
    pub project_name: &'a str,
}

impl GenerateRequest<'_> {
    /// Look up the imported package info for an external dependency name.
    pub fn imported_package(&self, name: &str) -> Option<&PackageInfo> {
        self.imported_packages.iter().find(|p| p.name() == name)
    }
}

/// The per-tool strategy pair: a factory for empty project sets and the
/// generator materializing one project's descriptor file(s).
///
/// `generate_project_files` is side-effect-free with respect to every
/// project other than the one named in the request; its only permitted
/// mutation beyond the descriptor write is registering this project (and
/// its reference edges) into the shared set.
pub trait ProjectSetFactory {
    fn tool(&self) -> BuildTool;

    /// A fresh, empty project set. Two calls never share mutable state;
    /// each generation run owns exactly one instance.
    fn create(&self) -> Box<dyn ProjectSet>;

    /// Generate the descriptor file(s) for one project and fold its
    /// identity into the shared set.
    fn generate_project_files(
        &self,
        request: &GenerateRequest<'_>,
        project_set: &mut dyn ProjectSet,
    ) -> Result<()>;
}
