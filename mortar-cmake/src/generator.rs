use mortar_gen::{
    BuildFile, BuildTool, Error, GenerateRequest, ProjectIdentity, ProjectSet, Result,
};
use mortar_model::{
    ArtifactKind, ExternalDependency, FileRole, InternalReference, LinkScope, PackageOrigin,
    ProjectReference,
};

use crate::files::{CMakeListsFile, ExternalDeclaration, LinkDeclaration, RoleSection};

/// Oldest CMake this backend emits syntax for.
const CMAKE_FLOOR: (u32, u32) = (3, 8);

/// Role partitions in the order they appear in a rendered descriptor.
const ROLE_VARIABLES: [(FileRole, &str, bool); 5] = [
    (FileRole::PublicHeader, "PUBLIC_HEADERS", true),
    (FileRole::PrivateHeader, "PRIVATE_HEADERS", true),
    (FileRole::Source, "SOURCES", true),
    (FileRole::GeneratedProtocol, "PROTOCOL_SOURCES", true),
    (FileRole::Resource, "RESOURCES", false),
];

/// Renders one project's `CMakeLists.txt` and folds the project into the
/// shared set.
pub struct CMakeFileGenerator<'a> {
    request: &'a GenerateRequest<'a>,
}

impl<'a> CMakeFileGenerator<'a> {
    pub fn new(request: &'a GenerateRequest<'a>) -> Self {
        Self { request }
    }

    /// Run the full per-project algorithm: validate, render, write the
    /// descriptor, then register the project and its reference edges.
    pub fn generate(&self, project_set: &mut dyn ProjectSet) -> Result<()> {
        let file = self.plan()?;
        file.write(self.request.fsa, self.request.output_root)?;

        project_set.register(ProjectIdentity::new(
            self.request.project_name,
            file.directory.clone(),
            self.request.project_type,
        ))?;
        for reference in self.internal_references() {
            project_set.record_reference(self.request.project_name, reference.project())?;
        }
        Ok(())
    }

    /// Validate the request and resolve it into a renderable descriptor.
    /// No side effects; every generation error surfaces here, before
    /// anything touches the file system.
    pub fn plan(&self) -> Result<CMakeListsFile> {
        let request = self.request;

        let version = request.versions.version_for(BuildTool::CMake);
        if !version.meets(CMAKE_FLOOR.0, CMAKE_FLOOR.1) {
            return Err(Error::UnsupportedVersion {
                tool: BuildTool::CMake,
                version,
                required: format!("{}.{} or newer", CMAKE_FLOOR.0, CMAKE_FLOOR.1),
            });
        }

        for role in request.file_set.roles() {
            if !request.project_type.allows_role(role) {
                return Err(Error::InvalidProject {
                    project: request.project_name.to_string(),
                    reason: format!(
                        "files with role {:?} are not valid for a {:?} project",
                        role, request.project_type
                    ),
                });
            }
        }
        for reference in request.references {
            if !request.project_type.allows_reference(reference) {
                return Err(Error::InvalidProject {
                    project: request.project_name.to_string(),
                    reason: format!(
                        "internal references are not valid for a {:?} project",
                        request.project_type
                    ),
                });
            }
        }

        let directory = request.layout.project_directory(
            request.bundle,
            request.project_type,
            request.project_name,
        );

        let role_sections: Vec<RoleSection> = ROLE_VARIABLES
            .iter()
            .filter_map(|(role, variable, in_target)| {
                let paths = request.file_set.files_for(*role);
                if paths.is_empty() {
                    return None;
                }
                Some(RoleSection {
                    variable,
                    paths: paths.to_vec(),
                    in_target: *in_target,
                })
            })
            .collect();

        let artifact = request.project_type.artifact();
        if artifact == ArtifactKind::Executable && role_sections.iter().all(|s| !s.in_target) {
            return Err(Error::InvalidProject {
                project: request.project_name.to_string(),
                reason: "an executable project needs at least one source file".to_string(),
            });
        }

        let mut externals = Vec::new();
        let mut links = Vec::new();
        for dependency in self.external_dependencies() {
            let package = request.imported_package(dependency.name()).ok_or_else(|| {
                Error::DependencyResolution {
                    project: request.project_name.to_string(),
                    dependency: dependency.name().to_string(),
                }
            })?;
            externals.push(match package.origin() {
                PackageOrigin::System => ExternalDeclaration::FindPackage {
                    package: dependency.package_id().to_string(),
                    constraint: dependency.constraint(),
                },
                PackageOrigin::Vendored(path) => ExternalDeclaration::Subdirectory {
                    path: path.clone(),
                },
            });
            links.push(LinkDeclaration {
                scope: LinkScope::Build,
                target: dependency.package_id().to_string(),
            });
        }
        for reference in self.internal_references() {
            links.push(LinkDeclaration {
                scope: reference.scope(),
                target: reference.project().to_string(),
            });
        }

        Ok(CMakeListsFile {
            directory,
            project_name: request.project_name.to_string(),
            minimum_version: version,
            cpp_standard: request.bundle.cpp_standard(),
            artifact,
            role_sections,
            externals,
            links,
        })
    }

    /// External dependencies from the dedicated list plus any carried
    /// inside the reference list, first occurrence of a name wins.
    fn external_dependencies(&self) -> Vec<&ExternalDependency> {
        let from_references = self.request.references.iter().filter_map(|r| match r {
            ProjectReference::External(dep) => Some(dep),
            ProjectReference::Internal(_) => None,
        });
        let mut seen: Vec<&ExternalDependency> = Vec::new();
        for dependency in self.request.external_dependencies.iter().chain(from_references) {
            if seen.iter().any(|d| d.name() == dependency.name()) {
                continue;
            }
            seen.push(dependency);
        }
        seen
    }

    fn internal_references(&self) -> impl Iterator<Item = &InternalReference> {
        self.request.references.iter().filter_map(|r| match r {
            ProjectReference::Internal(reference) => Some(reference),
            ProjectReference::External(_) => None,
        })
    }
}
