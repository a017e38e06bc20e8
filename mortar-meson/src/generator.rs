use mortar_gen::{
    BuildFile, BuildTool, Error, GenerateRequest, ProjectIdentity, ProjectSet, Result,
};
use mortar_model::{
    ArtifactKind, ExternalDependency, FileRole, InternalReference, LinkScope, PackageOrigin,
    ProjectReference,
};

use crate::files::{ExternalImport, MesonBuildFile, RoleList};
use crate::meson_ident;

/// Oldest Meson this backend emits syntax for.
const MESON_FLOOR: (u32, u32) = (1, 0);

/// Role partitions in the order they appear in a rendered descriptor.
/// Headers stay out of the target; Meson picks them up through
/// `include_directories`.
const ROLE_LISTS: [(FileRole, &str, bool); 5] = [
    (FileRole::PublicHeader, "headers", false),
    (FileRole::PrivateHeader, "private_headers", false),
    (FileRole::Source, "sources", true),
    (FileRole::GeneratedProtocol, "protocol_sources", true),
    (FileRole::Resource, "resources", false),
];

/// Renders one project's `meson.build` and folds the project into the
/// shared set.
pub struct MesonFileGenerator<'a> {
    request: &'a GenerateRequest<'a>,
}

impl<'a> MesonFileGenerator<'a> {
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
    pub fn plan(&self) -> Result<MesonBuildFile> {
        let request = self.request;

        let version = request.versions.version_for(BuildTool::Meson);
        if !version.meets(MESON_FLOOR.0, MESON_FLOOR.1) {
            return Err(Error::UnsupportedVersion {
                tool: BuildTool::Meson,
                version,
                required: format!("{}.{} or newer", MESON_FLOOR.0, MESON_FLOOR.1),
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

        let role_lists: Vec<RoleList> = ROLE_LISTS
            .iter()
            .filter_map(|(role, suffix, in_target)| {
                let paths = request.file_set.files_for(*role);
                if paths.is_empty() {
                    return None;
                }
                Some(RoleList {
                    suffix,
                    paths: paths.to_vec(),
                    in_target: *in_target,
                })
            })
            .collect();

        let artifact = request.project_type.artifact();
        if artifact == ArtifactKind::Executable && role_lists.iter().all(|l| !l.in_target) {
            return Err(Error::InvalidProject {
                project: request.project_name.to_string(),
                reason: "an executable project needs at least one source file".to_string(),
            });
        }

        let mut externals = Vec::new();
        let mut build_deps = Vec::new();
        let mut export_deps = Vec::new();
        for dependency in self.external_dependencies() {
            let package = request.imported_package(dependency.name()).ok_or_else(|| {
                Error::DependencyResolution {
                    project: request.project_name.to_string(),
                    dependency: dependency.name().to_string(),
                }
            })?;
            let variable = format!("{}_dep", meson_ident(dependency.name()));
            externals.push(match package.origin() {
                PackageOrigin::System => ExternalImport::Pkg {
                    variable: variable.clone(),
                    package: dependency.name().to_string(),
                    constraint: dependency.constraint(),
                },
                PackageOrigin::Vendored(_) => ExternalImport::Subproject {
                    variable: variable.clone(),
                    package: dependency.name().to_string(),
                },
            });
            build_deps.push(variable);
        }
        for reference in self.internal_references() {
            let variable = format!("{}_dep", meson_ident(reference.project()));
            match reference.scope() {
                LinkScope::Build => build_deps.push(variable),
                LinkScope::Link => {
                    build_deps.push(variable.clone());
                    export_deps.push(variable);
                }
                LinkScope::Interface => export_deps.push(variable),
            }
        }
        // Executables have no consumers; fold exported scopes into the target.
        if artifact == ArtifactKind::Executable {
            for variable in export_deps.drain(..) {
                if !build_deps.contains(&variable) {
                    build_deps.push(variable);
                }
            }
        }

        Ok(MesonBuildFile {
            directory,
            project_name: request.project_name.to_string(),
            ident: meson_ident(request.project_name),
            cpp_standard: request.bundle.cpp_standard(),
            artifact,
            role_lists,
            externals,
            build_deps,
            export_deps,
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
