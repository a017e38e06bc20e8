use serde::{Deserialize, Serialize};

/// The C++ language standard a generated project is built against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CppStandard {
    Cpp14,
    #[default]
    Cpp17,
    Cpp20,
}

impl CppStandard {
    /// The standard's year, as build tools spell it (`17` in
    /// `CMAKE_CXX_STANDARD 17`, `c++17` in Meson's `cpp_std`).
    pub fn year(&self) -> u32 {
        match self {
            CppStandard::Cpp14 => 14,
            CppStandard::Cpp17 => 17,
            CppStandard::Cpp20 => 20,
        }
    }
}

/// Immutable context bag for one generation call.
///
/// Constructed once per call and passed by reference through the whole
/// pipeline; there is no way to mutate it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBundle {
    module_path: Vec<String>,
    cpp_standard: CppStandard,
}

impl ParameterBundle {
    pub fn new(module_path: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            module_path: module_path.into_iter().map(Into::into).collect(),
            cpp_standard: CppStandard::default(),
        }
    }

    pub fn with_cpp_standard(mut self, standard: CppStandard) -> Self {
        self.cpp_standard = standard;
        self
    }

    /// The target module/package path segments, outermost first.
    pub fn module_path(&self) -> &[String] {
        &self.module_path
    }

    pub fn cpp_standard(&self) -> CppStandard {
        self.cpp_standard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_years() {
        assert_eq!(CppStandard::Cpp14.year(), 14);
        assert_eq!(CppStandard::Cpp17.year(), 17);
        assert_eq!(CppStandard::Cpp20.year(), 20);
    }

    #[test]
    fn test_bundle_accessors() {
        let bundle = ParameterBundle::new(["btc", "commons", "time"])
            .with_cpp_standard(CppStandard::Cpp20);
        assert_eq!(bundle.module_path(), &["btc", "commons", "time"]);
        assert_eq!(bundle.cpp_standard(), CppStandard::Cpp20);
    }

    #[test]
    fn test_default_standard() {
        let bundle = ParameterBundle::new(Vec::<String>::new());
        assert_eq!(bundle.cpp_standard(), CppStandard::Cpp17);
    }
}
