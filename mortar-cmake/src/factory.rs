use mortar_gen::{BuildTool, GenerateRequest, ProjectSet, ProjectSetFactory, Result};

use crate::{CMakeFileGenerator, CMakeProjectSet};

/// The CMake strategy pair: fresh project sets and per-project descriptor
/// generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CMakeProjectSetFactory;

impl CMakeProjectSetFactory {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectSetFactory for CMakeProjectSetFactory {
    fn tool(&self) -> BuildTool {
        BuildTool::CMake
    }

    fn create(&self) -> Box<dyn ProjectSet> {
        Box::new(CMakeProjectSet::new())
    }

    fn generate_project_files(
        &self,
        request: &GenerateRequest<'_>,
        project_set: &mut dyn ProjectSet,
    ) -> Result<()> {
        CMakeFileGenerator::new(request).generate(project_set)
    }
}
