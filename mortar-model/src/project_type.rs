use serde::{Deserialize, Serialize};

use crate::{FileRole, ProjectReference};

/// The kind of buildable unit a generator run can produce.
///
/// The type decides which file roles and which reference variants are legal
/// for a project, and whether the backend declares a library or an
/// executable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// A plain library exposing public headers.
    Library,
    /// A runnable program.
    Executable,
    /// A test driver, built as an executable.
    Test,
    /// A client-side proxy library over a generated protocol.
    Proxy,
    /// A server-side dispatcher library over a generated protocol.
    Dispatcher,
    /// A library holding generated protocol sources only.
    Protocol,
}

/// What the build tool ultimately declares for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Library,
    Executable,
}

impl ProjectType {
    pub fn artifact(&self) -> ArtifactKind {
        match self {
            ProjectType::Executable | ProjectType::Test => ArtifactKind::Executable,
            ProjectType::Library
            | ProjectType::Proxy
            | ProjectType::Dispatcher
            | ProjectType::Protocol => ArtifactKind::Library,
        }
    }

    /// Whether files of the given role may appear in a project of this type.
    ///
    /// Executables and test drivers export nothing, so public headers are
    /// illegal there; generated protocol sources only belong to the
    /// protocol-handling project kinds.
    pub fn allows_role(&self, role: FileRole) -> bool {
        match role {
            FileRole::PublicHeader => self.artifact() == ArtifactKind::Library,
            FileRole::GeneratedProtocol => matches!(
                self,
                ProjectType::Protocol | ProjectType::Proxy | ProjectType::Dispatcher
            ),
            FileRole::PrivateHeader | FileRole::Source | FileRole::Resource => true,
        }
    }

    /// Whether a project of this type may carry the given reference.
    ///
    /// Protocol projects sit at the bottom of the graph: they may depend on
    /// external packages (the protocol runtime) but never on other generated
    /// projects.
    pub fn allows_reference(&self, reference: &ProjectReference) -> bool {
        match reference {
            ProjectReference::External(_) => true,
            ProjectReference::Internal(_) => !matches!(self, ProjectType::Protocol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExternalDependency, InternalReference, LinkScope, VersionConstraint};

    #[test]
    fn test_artifact_kinds() {
        assert_eq!(ProjectType::Library.artifact(), ArtifactKind::Library);
        assert_eq!(ProjectType::Proxy.artifact(), ArtifactKind::Library);
        assert_eq!(ProjectType::Executable.artifact(), ArtifactKind::Executable);
        assert_eq!(ProjectType::Test.artifact(), ArtifactKind::Executable);
    }

    #[test]
    fn test_public_headers_only_for_libraries() {
        assert!(ProjectType::Library.allows_role(FileRole::PublicHeader));
        assert!(!ProjectType::Executable.allows_role(FileRole::PublicHeader));
        assert!(!ProjectType::Test.allows_role(FileRole::PublicHeader));
    }

    #[test]
    fn test_protocol_sources_restricted() {
        assert!(ProjectType::Protocol.allows_role(FileRole::GeneratedProtocol));
        assert!(ProjectType::Proxy.allows_role(FileRole::GeneratedProtocol));
        assert!(!ProjectType::Library.allows_role(FileRole::GeneratedProtocol));
    }

    #[test]
    fn test_protocol_takes_no_internal_references() {
        let internal = ProjectReference::Internal(InternalReference::new("base", LinkScope::Link));
        let external = ProjectReference::External(ExternalDependency::new(
            "protobuf",
            VersionConstraint::Any,
        ));
        assert!(!ProjectType::Protocol.allows_reference(&internal));
        assert!(ProjectType::Protocol.allows_reference(&external));
        assert!(ProjectType::Library.allows_reference(&internal));
    }
}
