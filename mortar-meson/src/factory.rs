use mortar_gen::{BuildTool, GenerateRequest, ProjectSet, ProjectSetFactory, Result};

use crate::{MesonFileGenerator, MesonProjectSet};

/// The Meson strategy pair: fresh project sets and per-project descriptor
/// generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MesonProjectSetFactory;

impl MesonProjectSetFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectSetFactory for MesonProjectSetFactory {
    fn tool(&self) -> BuildTool {
        BuildTool::Meson
    }

    fn create(&self) -> Box<dyn ProjectSet> {
        Box::new(MesonProjectSet::new())
    }

    fn generate_project_files(
        &self,
        request: &GenerateRequest<'_>,
        project_set: &mut dyn ProjectSet,
    ) -> Result<()> {
        MesonFileGenerator::new(request).generate(project_set)
    }
}
