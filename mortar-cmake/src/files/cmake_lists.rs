use std::path::{Path, PathBuf};

use mortar_gen::{BuildFile, GENERATED_HEADER, Indent, ScriptBuilder, slash_path};
use mortar_model::{ArtifactKind, CppStandard, LinkScope, Version, VersionConstraint};

/// One project's `CMakeLists.txt`, fully resolved and ready to render.
///
/// The generator does all validation and dependency resolution before
/// constructing this, so rendering is pure and deterministic.
pub struct CMakeListsFile {
    /// Output-root-relative directory the descriptor lands in.
    pub directory: PathBuf,
    pub project_name: String,
    pub minimum_version: Version,
    pub cpp_standard: CppStandard,
    pub artifact: ArtifactKind,
    /// Role-partitioned file lists, each rendered as a `set( VAR ... )`
    /// block in insertion order.
    pub role_sections: Vec<RoleSection>,
    pub externals: Vec<ExternalDeclaration>,
    pub links: Vec<LinkDeclaration>,
}

/// A `set( VAR ... )` file list; `in_target` marks variables that feed the
/// target declaration (resources are listed but not compiled).
pub struct RoleSection {
    pub variable: &'static str,
    pub paths: Vec<String>,
    pub in_target: bool,
}

/// How an external dependency is declared.
pub enum ExternalDeclaration {
    /// System package: `find_package( Name <version> REQUIRED )`.
    FindPackage {
        package: String,
        constraint: VersionConstraint,
    },
    /// Vendored package: `add_subdirectory` of its source tree.
    Subdirectory { path: PathBuf },
}

impl ExternalDeclaration {
    fn to_line(&self) -> String {
        match self {
            ExternalDeclaration::FindPackage {
                package,
                constraint,
            } => match constraint {
                VersionConstraint::Any => format!("find_package( {} REQUIRED )", package),
                VersionConstraint::AtLeast(v) => {
                    format!("find_package( {} {} REQUIRED )", package, v)
                }
                VersionConstraint::Exact(v) => {
                    format!("find_package( {} {} EXACT REQUIRED )", package, v)
                }
            },
            ExternalDeclaration::Subdirectory { path } => {
                let path = slash_path(path);
                format!(
                    "add_subdirectory( ${{CMAKE_SOURCE_DIR}}/{} ${{CMAKE_BINARY_DIR}}/{} )",
                    path, path
                )
            }
        }
    }
}

/// One entry of the `target_link_libraries` block.
pub struct LinkDeclaration {
    pub scope: LinkScope,
    pub target: String,
}

impl CMakeListsFile {
    /// A library with no compiled files becomes an INTERFACE target, which
    /// is the only valid spelling of a source-less library in CMake.
    pub fn is_interface(&self) -> bool {
        self.artifact == ArtifactKind::Library
            && !self
                .role_sections
                .iter()
                .any(|s| s.in_target && !s.paths.is_empty())
    }

    fn scope_keyword(&self, scope: LinkScope) -> &'static str {
        if self.is_interface() {
            return "INTERFACE";
        }
        match scope {
            LinkScope::Build => "PRIVATE",
            LinkScope::Link => "PUBLIC",
            LinkScope::Interface => "INTERFACE",
        }
    }

    /// Unique first path components of the public headers, in insertion
    /// order; headers at the project root map to `.`.
    fn public_include_dirs(&self) -> Option<Vec<&str>> {
        let section = self
            .role_sections
            .iter()
            .find(|s| s.variable == "PUBLIC_HEADERS" && !s.paths.is_empty())?;
        let mut dirs: Vec<&str> = Vec::new();
        for path in &section.paths {
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

    fn render_target(&self, builder: ScriptBuilder, command: &str) -> ScriptBuilder {
        builder
            .line(&format!("{}( {}", command, self.project_name))
            .indent()
            .each(
                self.role_sections
                    .iter()
                    .filter(|s| s.in_target && !s.paths.is_empty()),
                |b, section| b.line(&format!("${{{}}}", section.variable)),
            )
            .dedent()
            .line(")")
    }
}

impl BuildFile for CMakeListsFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.directory).join("CMakeLists.txt")
    }

    fn render(&self) -> String {
        let mut builder = ScriptBuilder::new(Indent::CMAKE)
            .comment(GENERATED_HEADER)
            .line(&format!(
                "cmake_minimum_required( VERSION {} )",
                self.minimum_version
            ))
            .line(&format!("project( {} CXX )", self.project_name))
            .blank()
            .line(&format!(
                "set( CMAKE_CXX_STANDARD {} )",
                self.cpp_standard.year()
            ))
            .line("set( CMAKE_CXX_STANDARD_REQUIRED ON )")
            .line("set( CMAKE_CXX_EXTENSIONS OFF )");

        if !self.externals.is_empty() {
            builder = builder
                .blank()
                .each(&self.externals, |b, decl| b.line(&decl.to_line()));
        }

        for section in &self.role_sections {
            if section.paths.is_empty() {
                continue;
            }
            builder = builder
                .blank()
                .line(&format!("set( {}", section.variable))
                .indent()
                .each(&section.paths, |b, path| b.line(path))
                .dedent()
                .line(")");
        }

        builder = builder.blank();
        builder = match (self.artifact, self.is_interface()) {
            (ArtifactKind::Library, true) => {
                builder.line(&format!("add_library( {} INTERFACE )", self.project_name))
            }
            (ArtifactKind::Library, false) => self.render_target(builder, "add_library"),
            (ArtifactKind::Executable, _) => self.render_target(builder, "add_executable"),
        };

        if let Some(dirs) = self.public_include_dirs() {
            let keyword = if self.is_interface() {
                "INTERFACE"
            } else {
                "PUBLIC"
            };
            builder = builder.line(&format!(
                "target_include_directories( {} {} {} )",
                self.project_name,
                keyword,
                dirs.join(" ")
            ));
        }

        if !self.links.is_empty() {
            builder = builder
                .line(&format!("target_link_libraries( {}", self.project_name))
                .indent()
                .each(&self.links, |b, link| {
                    b.line(&format!("{} {}", self.scope_keyword(link.scope), link.target))
                })
                .dedent()
                .line(")");
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_library(name: &str) -> CMakeListsFile {
        CMakeListsFile {
            directory: PathBuf::from(name),
            project_name: name.to_string(),
            minimum_version: Version::new(3, 19, 0),
            cpp_standard: CppStandard::Cpp17,
            artifact: ArtifactKind::Library,
            role_sections: Vec::new(),
            externals: Vec::new(),
            links: Vec::new(),
        }
    }

    #[test]
    fn test_empty_library_is_interface() {
        let file = minimal_library("empty-lib");
        assert!(file.is_interface());
        assert!(file.render().contains("add_library( empty-lib INTERFACE )"));
    }

    #[test]
    fn test_resources_never_feed_the_target() {
        let mut file = minimal_library("res-lib");
        file.role_sections.push(RoleSection {
            variable: "RESOURCES",
            paths: vec!["data/schema.json".to_string()],
            in_target: false,
        });

        let rendered = file.render();
        assert!(rendered.contains("set( RESOURCES"));
        assert!(!rendered.contains("${RESOURCES}"));
        // still source-less, so the target stays INTERFACE
        assert!(rendered.contains("add_library( res-lib INTERFACE )"));
    }

    #[test]
    fn test_interface_links_coerce_scope() {
        let mut file = minimal_library("hdr-only");
        file.links.push(LinkDeclaration {
            scope: LinkScope::Build,
            target: "base".to_string(),
        });

        assert!(file.render().contains("INTERFACE base"));
    }

    #[test]
    fn test_descriptor_path() {
        let file = minimal_library("lib");
        assert_eq!(
            file.path(Path::new("/out")),
            PathBuf::from("/out/lib/CMakeLists.txt")
        );
    }

    #[test]
    fn test_include_dirs_from_header_roots() {
        let mut file = minimal_library("lib");
        file.role_sections.push(RoleSection {
            variable: "PUBLIC_HEADERS",
            paths: vec![
                "include/a.h".to_string(),
                "include/b.h".to_string(),
                "api/c.h".to_string(),
            ],
            in_target: true,
        });

        assert!(
            file.render()
                .contains("target_include_directories( lib PUBLIC include api )")
        );
    }

    #[test]
    fn test_exact_constraint_rendering() {
        let decl = ExternalDeclaration::FindPackage {
            package: "Protobuf".to_string(),
            constraint: VersionConstraint::Exact(Version::new(3, 21, 12)),
        };
        assert_eq!(
            decl.to_line(),
            "find_package( Protobuf 3.21.12 EXACT REQUIRED )"
        );
    }
}
