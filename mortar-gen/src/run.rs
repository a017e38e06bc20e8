use std::path::PathBuf;

use mortar_model::{
    ExternalDependency, PackageInfo, ParameterBundle, ProjectFileSet, ProjectReference,
    ProjectType,
};

use crate::{
    FileSystemAccess, FinalizeContext, FinalizeSummary, GenerateRequest, ModuleStructureStrategy,
    ProjectSet, ProjectSetFactory, Result, TargetVersionProvider,
};

/// One project's worth of generation input, as handed over by the
/// orchestration layer.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    pub name: String,
    pub project_type: ProjectType,
    pub bundle: ParameterBundle,
    pub external_dependencies: Vec<ExternalDependency>,
    pub imported_packages: Vec<PackageInfo>,
    pub references: Vec<ProjectReference>,
    pub file_set: ProjectFileSet,
}

impl ProjectInput {
    pub fn new(
        name: impl Into<String>,
        project_type: ProjectType,
        bundle: ParameterBundle,
    ) -> Self {
        Self {
            name: name.into(),
            project_type,
            bundle,
            external_dependencies: Vec::new(),
            imported_packages: Vec::new(),
            references: Vec::new(),
            file_set: ProjectFileSet::new(),
        }
    }
}

/// Drives one generation run against a selected backend.
///
/// Owns the run's single project set. Projects generate sequentially; the
/// set is mutated through one `&mut` path only. `finish` consumes the run,
/// so no handle to the set survives finalize and post-finalize mutation
/// through this type cannot compile.
pub struct GenerationRun<'a> {
    factory: &'a dyn ProjectSetFactory,
    fsa: &'a dyn FileSystemAccess,
    layout: &'a dyn ModuleStructureStrategy,
    versions: &'a dyn TargetVersionProvider,
    output_root: PathBuf,
    project_set: Box<dyn ProjectSet>,
}

impl<'a> GenerationRun<'a> {
    pub fn new(
        factory: &'a dyn ProjectSetFactory,
        fsa: &'a dyn FileSystemAccess,
        layout: &'a dyn ModuleStructureStrategy,
        versions: &'a dyn TargetVersionProvider,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            factory,
            fsa,
            layout,
            versions,
            output_root: output_root.into(),
            project_set: factory.create(),
        }
    }

    /// Generate descriptor files for one project.
    pub fn generate(&mut self, input: &ProjectInput) -> Result<()> {
        let request = GenerateRequest {
            fsa: self.fsa,
            layout: self.layout,
            versions: self.versions,
            bundle: &input.bundle,
            external_dependencies: &input.external_dependencies,
            imported_packages: &input.imported_packages,
            references: &input.references,
            file_set: &input.file_set,
            project_type: input.project_type,
            output_root: &self.output_root,
            project_name: &input.name,
        };
        self.factory
            .generate_project_files(&request, self.project_set.as_mut())
    }

    /// Read access to the accumulating set, for the orchestration layer.
    pub fn project_set(&self) -> &dyn ProjectSet {
        self.project_set.as_ref()
    }

    /// Write the aggregate descriptor and end the run.
    pub fn finish(mut self, workspace_name: &str) -> Result<FinalizeSummary> {
        let ctx = FinalizeContext {
            workspace_name,
            output_root: &self.output_root,
            versions: self.versions,
        };
        self.project_set.finalize(self.fsa, &ctx)
    }
}
