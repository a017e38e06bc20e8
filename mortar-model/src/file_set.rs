use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The role a generated file plays within its project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRole {
    PublicHeader,
    PrivateHeader,
    Source,
    Resource,
    GeneratedProtocol,
}

/// Ordered registry of the generated files belonging to one project,
/// partitioned by role.
///
/// Paths are relative to the project root and unique within a role.
/// Insertion order is preserved: backends emit source lists in declaration
/// order so regenerated builds stay reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFileSet {
    files: IndexMap<FileRole, Vec<String>>,
}

impl ProjectFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file under the given role.
    ///
    /// Returns `false` if the path is already registered under that role.
    pub fn add(&mut self, role: FileRole, path: impl Into<String>) -> bool {
        let path = path.into();
        let entries = self.files.entry(role).or_default();
        if entries.iter().any(|existing| *existing == path) {
            return false;
        }
        entries.push(path);
        true
    }

    /// The files registered under a role, in insertion order.
    pub fn files_for(&self, role: FileRole) -> &[String] {
        self.files.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Roles with at least one file, in first-insertion order.
    pub fn roles(&self) -> impl Iterator<Item = FileRole> + '_ {
        self.files
            .iter()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(role, _)| *role)
    }

    pub fn is_empty(&self) -> bool {
        self.files.values().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = ProjectFileSet::new();
        set.add(FileRole::Source, "src/zeta.cpp");
        set.add(FileRole::Source, "src/alpha.cpp");
        set.add(FileRole::Source, "src/mid.cpp");

        assert_eq!(
            set.files_for(FileRole::Source),
            &["src/zeta.cpp", "src/alpha.cpp", "src/mid.cpp"]
        );
    }

    #[test]
    fn test_duplicate_within_role_rejected() {
        let mut set = ProjectFileSet::new();
        assert!(set.add(FileRole::Source, "src/a.cpp"));
        assert!(!set.add(FileRole::Source, "src/a.cpp"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_same_path_allowed_across_roles() {
        let mut set = ProjectFileSet::new();
        assert!(set.add(FileRole::Source, "gen/service.pb.cc"));
        assert!(set.add(FileRole::GeneratedProtocol, "gen/service.pb.cc"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_role_order_follows_first_insertion() {
        let mut set = ProjectFileSet::new();
        set.add(FileRole::Source, "src/a.cpp");
        set.add(FileRole::PublicHeader, "include/a.h");

        let roles: Vec<FileRole> = set.roles().collect();
        assert_eq!(roles, vec![FileRole::Source, FileRole::PublicHeader]);
    }

    #[test]
    fn test_empty() {
        let set = ProjectFileSet::new();
        assert!(set.is_empty());
        assert_eq!(set.files_for(FileRole::Resource), &[] as &[String]);
    }
}
