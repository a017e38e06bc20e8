//! Generation tests for the CMake backend.
//!
//! Cover the per-project descriptor algorithm, the aggregate root
//! descriptor, and the failure modes that must leave nothing on disk.

use std::{fs, path::Path};

use mortar_cmake::{CMakeFileGenerator, CMakeProjectSetFactory};
use mortar_gen::{
    BuildFile, BuildTool, DiskFileSystem, Error, FinalizeContext, FixedVersionProvider,
    FlatLayout, GenerateRequest, GenerationRun, ProjectIdentity, ProjectInput, ProjectSet,
    ProjectSetFactory, testing::assert_content_eq,
};
use mortar_model::{
    ExternalDependency, FileRole, InternalReference, LinkScope, PackageInfo, ParameterBundle,
    ProjectFileSet, ProjectReference, ProjectType, Version, VersionConstraint,
};
use tempfile::TempDir;

fn library_input(name: &str) -> ProjectInput {
    ProjectInput::new(
        name,
        ProjectType::Library,
        ParameterBundle::new(Vec::<String>::new()),
    )
}

struct TestRun {
    temp: TempDir,
    factory: CMakeProjectSetFactory,
    fsa: DiskFileSystem,
    layout: FlatLayout,
    versions: FixedVersionProvider,
}

impl TestRun {
    fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
            factory: CMakeProjectSetFactory::new(),
            fsa: DiskFileSystem::new(),
            layout: FlatLayout,
            versions: FixedVersionProvider::new(),
        }
    }

    fn with_versions(versions: FixedVersionProvider) -> Self {
        Self {
            versions,
            ..Self::new()
        }
    }

    fn run(&self) -> GenerationRun<'_> {
        GenerationRun::new(
            &self.factory,
            &self.fsa,
            &self.layout,
            &self.versions,
            self.temp.path(),
        )
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.temp.path().join(relative)).unwrap()
    }

    fn exists(&self, relative: &str) -> bool {
        self.temp.path().join(relative).exists()
    }
}

#[test]
fn test_empty_library_minimal_descriptor() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    run.generate(&library_input("empty-lib")).unwrap();

    assert_content_eq(
        "# Generated by mortar. Do not edit by hand.\n\
         cmake_minimum_required( VERSION 3.19.0 )\n\
         project( empty-lib CXX )\n\
         \n\
         set( CMAKE_CXX_STANDARD 17 )\n\
         set( CMAKE_CXX_STANDARD_REQUIRED ON )\n\
         set( CMAKE_CXX_EXTENSIONS OFF )\n\
         \n\
         add_library( empty-lib INTERFACE )\n",
        &ctx.read("empty-lib/CMakeLists.txt"),
    );
}

#[test]
fn test_full_library_descriptor() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    run.generate(&library_input("base-api")).unwrap();

    let mut input = library_input("time-api");
    input.file_set.add(FileRole::PublicHeader, "include/time_api.h");
    input.file_set.add(FileRole::Source, "src/time_api.cpp");
    input.file_set.add(FileRole::Source, "src/clock.cpp");
    input.external_dependencies.push(
        ExternalDependency::new("boost", VersionConstraint::AtLeast(Version::new(1, 71, 0)))
            .with_package_id("Boost"),
    );
    input
        .imported_packages
        .push(PackageInfo::system("boost", Version::new(1, 71, 0)));
    input.references.push(ProjectReference::Internal(
        InternalReference::new("base-api", LinkScope::Link),
    ));
    run.generate(&input).unwrap();

    let content = ctx.read("time-api/CMakeLists.txt");
    insta::assert_snapshot!(content.trim_end(), @r#"
    # Generated by mortar. Do not edit by hand.
    cmake_minimum_required( VERSION 3.19.0 )
    project( time-api CXX )

    set( CMAKE_CXX_STANDARD 17 )
    set( CMAKE_CXX_STANDARD_REQUIRED ON )
    set( CMAKE_CXX_EXTENSIONS OFF )

    find_package( Boost 1.71.0 REQUIRED )

    set( PUBLIC_HEADERS
      include/time_api.h
    )

    set( SOURCES
      src/time_api.cpp
      src/clock.cpp
    )

    add_library( time-api
      ${PUBLIC_HEADERS}
      ${SOURCES}
    )
    target_include_directories( time-api PUBLIC include )
    target_link_libraries( time-api
      PRIVATE Boost
      PUBLIC base-api
    )
    "#);
}

#[test]
fn test_vendored_dependency_uses_subdirectory() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    let mut input = library_input("render");
    input.file_set.add(FileRole::Source, "src/render.cpp");
    input
        .external_dependencies
        .push(ExternalDependency::new("fmt", VersionConstraint::Any));
    input.imported_packages.push(PackageInfo::vendored(
        "fmt",
        Version::new(9, 1, 0),
        "vendor/fmt",
    ));
    run.generate(&input).unwrap();

    let content = ctx.read("render/CMakeLists.txt");
    assert!(content.contains(
        "add_subdirectory( ${CMAKE_SOURCE_DIR}/vendor/fmt ${CMAKE_BINARY_DIR}/vendor/fmt )"
    ));
    assert!(!content.contains("find_package"));
}

#[test]
fn test_source_order_is_insertion_order() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    let mut input = library_input("ordered");
    input.file_set.add(FileRole::Source, "src/zz.cpp");
    input.file_set.add(FileRole::Source, "src/aa.cpp");
    run.generate(&input).unwrap();

    let content = ctx.read("ordered/CMakeLists.txt");
    let zz = content.find("src/zz.cpp").unwrap();
    let aa = content.find("src/aa.cpp").unwrap();
    assert!(zz < aa, "sources must not be reordered alphabetically");
}

#[test]
fn test_rendering_is_deterministic() {
    let fsa = DiskFileSystem::new();
    let layout = FlatLayout;
    let versions = FixedVersionProvider::new();
    let bundle = ParameterBundle::new(["btc"]);
    let mut file_set = ProjectFileSet::new();
    file_set.add(FileRole::Source, "src/a.cpp");
    file_set.add(FileRole::PublicHeader, "include/a.h");
    let dependencies = vec![ExternalDependency::new("zlib", VersionConstraint::Any)];
    let packages = vec![PackageInfo::system("zlib", Version::new(1, 2, 11))];
    let references = vec![ProjectReference::Internal(InternalReference::new(
        "base",
        LinkScope::Link,
    ))];

    let request = GenerateRequest {
        fsa: &fsa,
        layout: &layout,
        versions: &versions,
        bundle: &bundle,
        external_dependencies: &dependencies,
        imported_packages: &packages,
        references: &references,
        file_set: &file_set,
        project_type: ProjectType::Library,
        output_root: Path::new("unused"),
        project_name: "det",
    };

    let first = CMakeFileGenerator::new(&request).plan().unwrap().render();
    let second = CMakeFileGenerator::new(&request).plan().unwrap().render();
    assert_eq!(first, second);
}

#[test]
fn test_unresolved_dependency_writes_nothing() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    let mut input = library_input("broken");
    input
        .external_dependencies
        .push(ExternalDependency::new("ghost", VersionConstraint::Any));

    let err = run.generate(&input).unwrap_err();
    assert!(matches!(err, Error::DependencyResolution { .. }));
    assert!(!ctx.exists("broken/CMakeLists.txt"));
    assert!(!run.project_set().contains("broken"));
}

#[test]
fn test_reference_orders_both_succeed() {
    // A before B
    let ctx = TestRun::new();
    let mut run = ctx.run();
    run.generate(&library_input("a")).unwrap();
    let mut b = library_input("b");
    b.references.push(ProjectReference::Internal(InternalReference::new(
        "a",
        LinkScope::Link,
    )));
    run.generate(&b).unwrap();
    let summary = run.finish("workspace").unwrap();
    assert_eq!(summary.project_count, 2);

    let root = ctx.read("CMakeLists.txt");
    assert!(root.contains("add_subdirectory( ${CMAKE_CURRENT_SOURCE_DIR}/a )"));
    assert!(root.contains("add_subdirectory( ${CMAKE_CURRENT_SOURCE_DIR}/b )"));

    // B before A: the forward reference resolves at finalize
    let ctx = TestRun::new();
    let mut run = ctx.run();
    run.generate(&b).unwrap();
    run.generate(&library_input("a")).unwrap();
    let summary = run.finish("workspace").unwrap();
    assert_eq!(summary.project_count, 2);
}

#[test]
fn test_dangling_reference_fails_finalize() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    let mut input = library_input("lonely");
    input.references.push(ProjectReference::Internal(
        InternalReference::new("missing", LinkScope::Build),
    ));
    run.generate(&input).unwrap();

    let err = run.finish("workspace").unwrap_err();
    assert!(matches!(err, Error::ReferenceIntegrity { .. }));
    assert!(!ctx.exists("CMakeLists.txt"));
}

#[test]
fn test_empty_run_finalizes_to_minimal_aggregate() {
    let ctx = TestRun::new();
    let summary = ctx.run().finish("empty-ws").unwrap();
    assert_eq!(summary.project_count, 0);

    let root = ctx.read("CMakeLists.txt");
    assert!(root.contains("project( empty-ws CXX )"));
    assert!(!root.contains("add_subdirectory"));
}

#[test]
fn test_register_after_finalize_is_protocol_error() {
    let ctx = TestRun::new();
    let mut set = ctx.factory.create();
    let finalize = FinalizeContext {
        workspace_name: "ws",
        output_root: ctx.temp.path(),
        versions: &ctx.versions,
    };
    set.finalize(&ctx.fsa, &finalize).unwrap();

    let err = set
        .register(ProjectIdentity::new("late", "late", ProjectType::Library))
        .unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn test_unsupported_cmake_version_writes_nothing() {
    let ctx = TestRun::with_versions(
        FixedVersionProvider::new().with_version(BuildTool::CMake, Version::new(3, 2, 0)),
    );
    let mut run = ctx.run();

    let err = run.generate(&library_input("old")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion { .. }));
    assert!(!ctx.exists("old/CMakeLists.txt"));
}

#[test]
fn test_executable_without_sources_is_invalid() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    let input = ProjectInput::new(
        "tool",
        ProjectType::Executable,
        ParameterBundle::new(Vec::<String>::new()),
    );
    let err = run.generate(&input).unwrap_err();
    assert!(matches!(err, Error::InvalidProject { .. }));
}

#[test]
fn test_public_headers_on_executable_are_invalid() {
    let ctx = TestRun::new();
    let mut run = ctx.run();

    let mut input = ProjectInput::new(
        "tool",
        ProjectType::Executable,
        ParameterBundle::new(Vec::<String>::new()),
    );
    input.file_set.add(FileRole::Source, "src/main.cpp");
    input.file_set.add(FileRole::PublicHeader, "include/tool.h");

    let err = run.generate(&input).unwrap_err();
    assert!(matches!(err, Error::InvalidProject { .. }));
    assert!(!ctx.exists("tool/CMakeLists.txt"));
}

#[test]
fn test_factory_creates_independent_sets() {
    let factory = CMakeProjectSetFactory::new();
    let mut first = factory.create();
    let second = factory.create();

    first
        .register(ProjectIdentity::new("a", "a", ProjectType::Library))
        .unwrap();
    assert!(first.contains("a"));
    assert!(!second.contains("a"));
}
