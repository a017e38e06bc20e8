//! Test utilities for backend crates.
//!
//! Only available when the `testing` feature is enabled or during tests.

use std::path::Path;

use crate::{Error, Result};

/// Assert that two rendered descriptors are equal, with a line diff on
/// failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Run a generation closure against a fresh temporary directory.
///
/// The directory is cleaned up when the returned `TempDir` drops.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new().map_err(|source| Error::FileSystem {
        path: std::env::temp_dir(),
        source,
    })?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}
