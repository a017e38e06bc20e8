use mortar_gen::{
    BuildTool, Error, FileSystemAccess, FinalizeContext, FinalizeSummary, GENERATED_HEADER,
    Indent, ProjectIdentity, ProjectRegistry, ProjectSet, Result, ScriptBuilder, slash_path,
};

/// The Meson aggregate: all projects of one run plus the root `meson.build`
/// that sequences them with `subdir` calls.
#[derive(Debug, Default)]
pub struct MesonProjectSet {
    registry: ProjectRegistry,
}

impl MesonProjectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects ordered so every `subdir` runs after the subdirs it takes
    /// `<ident>_dep` variables from. Registration order breaks ties; a
    /// reference cycle falls back to registration order for the remainder.
    fn subdir_order(&self) -> Vec<&ProjectIdentity> {
        let projects = self.registry.projects();
        let mut ordered: Vec<&ProjectIdentity> = Vec::with_capacity(projects.len());
        let mut emitted: Vec<&str> = Vec::with_capacity(projects.len());

        while ordered.len() < projects.len() {
            let mut progressed = false;
            for project in projects {
                if emitted.contains(&project.name()) {
                    continue;
                }
                let ready = self
                    .registry
                    .references()
                    .filter(|(from, _)| *from == project.name())
                    .all(|(_, to)| emitted.contains(&to));
                if ready {
                    emitted.push(project.name());
                    ordered.push(project);
                    progressed = true;
                }
            }
            if !progressed {
                for project in projects {
                    if !emitted.contains(&project.name()) {
                        emitted.push(project.name());
                        ordered.push(project);
                    }
                }
            }
        }
        ordered
    }
}

impl ProjectSet for MesonProjectSet {
    fn tool(&self) -> BuildTool {
        BuildTool::Meson
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
        let version = ctx.versions.version_for(BuildTool::Meson);
        if !version.meets(1, 0) {
            return Err(Error::UnsupportedVersion {
                tool: BuildTool::Meson,
                version,
                required: "1.0 or newer".to_string(),
            });
        }

        self.registry.seal()?;
        let ordered = self.subdir_order();
        let project_count = ordered.len();

        let script = ScriptBuilder::new(Indent::MESON)
            .comment(GENERATED_HEADER)
            .line(&format!(
                "project('{}', 'cpp', meson_version : '>= {}')",
                ctx.workspace_name, version
            ))
            .when(!ordered.is_empty(), |b| {
                b.blank().each(ordered, |b, project| {
                    b.line(&format!("subdir('{}')", slash_path(project.directory())))
                })
            })
            .build();

        let descriptor = ctx.output_root.join("meson.build");
        fsa.write(&descriptor, &script)?;
        Ok(FinalizeSummary {
            descriptor,
            project_count,
        })
    }
}
