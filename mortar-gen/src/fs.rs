use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Render a relative path with forward slashes, the separator every
/// supported build tool expects regardless of host platform.
pub fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// File system access capability handed to generators.
///
/// Implementations must create missing parent directories and must write
/// atomically: a failed write leaves either the previous content or nothing,
/// never a truncated descriptor.
pub trait FileSystemAccess {
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Disk-backed [`FileSystemAccess`].
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// descriptor is either fully written or absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileSystem;

impl DiskFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemAccess for DiskFileSystem {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let fs_err = |source: io::Error| Error::FileSystem {
            path: path.to_path_buf(),
            source,
        };

        if path.is_dir() {
            return Err(fs_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path denotes a directory",
            )));
        }
        let file_name = path.file_name().ok_or_else(|| {
            fs_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path has no file name",
            ))
        })?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(fs_err)?;
        }

        let tmp: PathBuf = {
            let mut name = file_name.to_os_string();
            name.push(".tmp");
            path.with_file_name(name)
        };
        fs::write(&tmp, content).map_err(fs_err)?;
        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(fs_err(source));
        }
        Ok(())
    }
}
