mod meson_build;

pub use meson_build::{ExternalImport, MesonBuildFile, RoleList};
