use std::fmt;

use mortar_model::Version;

/// The build tools mortar can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTool {
    CMake,
    Meson,
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildTool::CMake => write!(f, "CMake"),
            BuildTool::Meson => write!(f, "Meson"),
        }
    }
}

/// Supplies the tool version a run targets.
///
/// Backends consult this for version-specific syntax and fail fast with
/// [`Error::UnsupportedVersion`](crate::Error::UnsupportedVersion) when the
/// reported version is below their floor.
pub trait TargetVersionProvider {
    fn version_for(&self, tool: BuildTool) -> Version;
}

/// A [`TargetVersionProvider`] with one fixed version per tool.
#[derive(Debug, Clone, Copy)]
pub struct FixedVersionProvider {
    cmake: Version,
    meson: Version,
}

impl Default for FixedVersionProvider {
    fn default() -> Self {
        Self {
            cmake: Version::new(3, 19, 0),
            meson: Version::new(1, 3, 0),
        }
    }
}

impl FixedVersionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, tool: BuildTool, version: Version) -> Self {
        match tool {
            BuildTool::CMake => self.cmake = version,
            BuildTool::Meson => self.meson = version,
        }
        self
    }
}

impl TargetVersionProvider for FixedVersionProvider {
    fn version_for(&self, tool: BuildTool) -> Version {
        match tool {
            BuildTool::CMake => self.cmake,
            BuildTool::Meson => self.meson,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let provider = FixedVersionProvider::new();
        assert_eq!(provider.version_for(BuildTool::CMake), Version::new(3, 19, 0));
        assert_eq!(provider.version_for(BuildTool::Meson), Version::new(1, 3, 0));
    }

    #[test]
    fn test_override_single_tool() {
        let provider = FixedVersionProvider::new()
            .with_version(BuildTool::CMake, Version::new(3, 28, 1));
        assert_eq!(provider.version_for(BuildTool::CMake), Version::new(3, 28, 1));
        assert_eq!(provider.version_for(BuildTool::Meson), Version::new(1, 3, 0));
    }

    #[test]
    fn test_tool_display() {
        assert_eq!(BuildTool::CMake.to_string(), "CMake");
        assert_eq!(BuildTool::Meson.to_string(), "Meson");
    }
}
