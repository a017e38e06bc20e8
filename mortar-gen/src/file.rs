use std::path::{Path, PathBuf};

use crate::{FileSystemAccess, Result};

/// Comment stamped at the top of every emitted descriptor.
pub const GENERATED_HEADER: &str = "Generated by mortar. Do not edit by hand.";

/// A build-descriptor file a backend knows how to render.
///
/// Rendering is pure; `write` renders the whole content first and hands it
/// to the file system in a single call, so descriptors are never flushed
/// half-finished.
pub trait BuildFile {
    /// The file path relative to (and joined onto) the output root.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the complete file content.
    fn render(&self) -> String;

    fn write(&self, fsa: &dyn FileSystemAccess, base: &Path) -> Result<()> {
        fsa.write(&self.path(base), &self.render())
    }
}
