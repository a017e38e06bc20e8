mod cmake_lists;

pub use cmake_lists::{CMakeListsFile, ExternalDeclaration, LinkDeclaration, RoleSection};
