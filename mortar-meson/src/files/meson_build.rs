use std::path::{Path, PathBuf};

use mortar_gen::{BuildFile, GENERATED_HEADER, Indent, ScriptBuilder};
use mortar_model::{ArtifactKind, CppStandard, VersionConstraint};

/// One project's `meson.build`, fully resolved and ready to render.
///
/// Meson has no target-scoped link keywords, so the generator pre-splits
/// dependency variables into the set passed to the build target and the set
/// re-exported through `declare_dependency`.
pub struct MesonBuildFile {
    /// Output-root-relative directory the descriptor lands in.
    pub directory: PathBuf,
    pub project_name: String,
    /// `project_name` with punctuation collapsed, used as variable prefix.
    pub ident: String,
    pub cpp_standard: CppStandard,
    pub artifact: ArtifactKind,
    /// Role-partitioned `files(...)` lists in insertion order.
    pub role_lists: Vec<RoleList>,
    pub externals: Vec<ExternalImport>,
    /// Dependency variables handed to the build target.
    pub build_deps: Vec<String>,
    /// Dependency variables re-exported to consumers of this library.
    pub export_deps: Vec<String>,
}

/// A `<ident>_<suffix> = files( ... )` list; `in_target` marks lists that
/// feed the target declaration.
pub struct RoleList {
    pub suffix: &'static str,
    pub paths: Vec<String>,
    pub in_target: bool,
}

/// How an external dependency is imported into scope.
pub enum ExternalImport {
    /// System package, found via `dependency('name', ...)`.
    Pkg {
        variable: String,
        package: String,
        constraint: VersionConstraint,
    },
    /// Vendored package, pulled in as a subproject that exposes a
    /// `<variable>` of its own.
    Subproject { variable: String, package: String },
}

impl ExternalImport {
    fn append(&self, builder: ScriptBuilder) -> ScriptBuilder {
        match self {
            ExternalImport::Pkg {
                variable,
                package,
                constraint,
            } => {
                let line = match constraint {
                    VersionConstraint::Any => {
                        format!("{} = dependency('{}')", variable, package)
                    }
                    VersionConstraint::AtLeast(v) => format!(
                        "{} = dependency('{}', version : '>= {}')",
                        variable, package, v
                    ),
                    VersionConstraint::Exact(v) => format!(
                        "{} = dependency('{}', version : '== {}')",
                        variable, package, v
                    ),
                };
                builder.line(&line)
            }
            ExternalImport::Subproject { variable, package } => builder
                .line(&format!("{}_proj = subproject('{}')", variable, package))
                .line(&format!(
                    "{} = {}_proj.get_variable('{}')",
                    variable, variable, variable
                )),
        }
    }
}

impl MesonBuildFile {
    /// A library with nothing to compile has no build target; only its
    /// `declare_dependency` is emitted.
    pub fn is_interface(&self) -> bool {
        self.artifact == ArtifactKind::Library
            && !self
                .role_lists
                .iter()
                .any(|l| l.in_target && !l.paths.is_empty())
    }

    /// Unique first path components of the public headers, in insertion
    /// order; headers at the project root map to `.`.
    fn public_include_dirs(&self) -> Option<Vec<&str>> {
        let list = self
            .role_lists
            .iter()
            .find(|l| l.suffix == "headers" && !l.paths.is_empty())?;
        let mut dirs: Vec<&str> = Vec::new();
        for path in &list.paths {
            let dir = if path.contains('/') {
                path.split('/').next().unwrap_or(".")
            } else {
                "."
            };
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        Some(dirs)
    }

    fn include_directories_kwarg(&self) -> Option<String> {
        let dirs = self.public_include_dirs()?;
        let quoted: Vec<String> = dirs.iter().map(|d| format!("'{}'", d)).collect();
        Some(format!(
            "include_directories : include_directories({}),",
            quoted.join(", ")
        ))
    }

    fn dependencies_kwarg(deps: &[String]) -> Option<String> {
        if deps.is_empty() {
            return None;
        }
        Some(format!("dependencies : [{}],", deps.join(", ")))
    }

    fn render_target(&self, builder: ScriptBuilder) -> ScriptBuilder {
        let (variable, function) = match self.artifact {
            ArtifactKind::Library => ("lib", "static_library"),
            ArtifactKind::Executable => ("exe", "executable"),
        };
        builder
            .blank()
            .line(&format!("{}_{} = {}(", self.ident, variable, function))
            .indent()
            .line(&format!("'{}',", self.project_name))
            .each(
                self.role_lists
                    .iter()
                    .filter(|l| l.in_target && !l.paths.is_empty()),
                |b, list| b.line(&format!("{}_{},", self.ident, list.suffix)),
            )
            .when(self.include_directories_kwarg().is_some(), |b| {
                b.line(&self.include_directories_kwarg().unwrap_or_default())
            })
            .when(Self::dependencies_kwarg(&self.build_deps).is_some(), |b| {
                b.line(&Self::dependencies_kwarg(&self.build_deps).unwrap_or_default())
            })
            .line(&format!(
                "override_options : ['cpp_std=c++{}'],",
                self.cpp_standard.year()
            ))
            .dedent()
            .line(")")
    }

    fn render_declare_dependency(&self, builder: ScriptBuilder) -> ScriptBuilder {
        builder
            .blank()
            .line(&format!("{}_dep = declare_dependency(", self.ident))
            .indent()
            .when(!self.is_interface(), |b| {
                b.line(&format!("link_with : {}_lib,", self.ident))
            })
            .when(self.include_directories_kwarg().is_some(), |b| {
                b.line(&self.include_directories_kwarg().unwrap_or_default())
            })
            .when(Self::dependencies_kwarg(&self.export_deps).is_some(), |b| {
                b.line(&Self::dependencies_kwarg(&self.export_deps).unwrap_or_default())
            })
            .dedent()
            .line(")")
    }
}

impl BuildFile for MesonBuildFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.directory).join("meson.build")
    }

    fn render(&self) -> String {
        let mut builder =
            ScriptBuilder::new(Indent::MESON).comment(GENERATED_HEADER);

        for list in &self.role_lists {
            if list.paths.is_empty() {
                continue;
            }
            builder = builder
                .blank()
                .line(&format!("{}_{} = files(", self.ident, list.suffix))
                .indent()
                .each(&list.paths, |b, path| b.line(&format!("'{}',", path)))
                .dedent()
                .line(")");
        }

        if !self.externals.is_empty() {
            builder = builder.blank();
            for import in &self.externals {
                builder = import.append(builder);
            }
        }

        if !self.is_interface() {
            builder = self.render_target(builder);
        }

        if self.artifact == ArtifactKind::Library {
            builder = self.render_declare_dependency(builder);
        }

        builder.build()
    }
}
