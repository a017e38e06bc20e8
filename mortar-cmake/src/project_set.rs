use mortar_gen::{
    BuildTool, Error, FileSystemAccess, FinalizeContext, FinalizeSummary, GENERATED_HEADER,
    Indent, ProjectIdentity, ProjectRegistry, ProjectSet, Result, ScriptBuilder, slash_path,
};

/// The CMake aggregate: all projects of one run plus the root
/// `CMakeLists.txt` that ties them together with `add_subdirectory`.
#[derive(Debug, Default)]
pub struct CMakeProjectSet {
    registry: ProjectRegistry,
}

impl CMakeProjectSet {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectSet for CMakeProjectSet {
    fn tool(&self) -> BuildTool {
        BuildTool::CMake
    }

    fn register(&mut self, project: ProjectIdentity) -> Result<()> {
        self.registry.register(project)
    }

    fn record_reference(&mut self, from: &str, to: &str) -> Result<()> {
        self.registry.record_reference(from, to)
    }

    fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn projects(&self) -> &[ProjectIdentity] {
        self.registry.projects()
    }

    fn is_finalized(&self) -> bool {
        self.registry.is_finalized()
    }

    fn finalize(
        &mut self,
        fsa: &dyn FileSystemAccess,
        ctx: &FinalizeContext<'_>,
    ) -> Result<FinalizeSummary> {
        let version = ctx.versions.version_for(BuildTool::CMake);
        if !version.meets(3, 8) {
            return Err(Error::UnsupportedVersion {
                tool: BuildTool::CMake,
                version,
                required: "3.8 or newer".to_string(),
            });
        }

        self.registry.seal()?;
        let projects = self.registry.projects();

        let script = ScriptBuilder::new(Indent::CMAKE)
            .comment(GENERATED_HEADER)
            .line(&format!("cmake_minimum_required( VERSION {} )", version))
            .line(&format!("project( {} CXX )", ctx.workspace_name))
            .when(!projects.is_empty(), |b| {
                b.blank().each(projects, |b, project| {
                    b.line(&format!(
                        "add_subdirectory( ${{CMAKE_CURRENT_SOURCE_DIR}}/{} )",
                        slash_path(project.directory())
                    ))
                })
            })
            .build();

        let descriptor = ctx.output_root.join("CMakeLists.txt");
        fsa.write(&descriptor, &script)?;
        Ok(FinalizeSummary {
            descriptor,
            project_count: projects.len(),
        })
    }
}
