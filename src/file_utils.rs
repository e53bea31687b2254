use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::Builder;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    /// Whether two paths point at the same file on disk
    pub fn same_file<P1: AsRef<Path>, P2: AsRef<Path>>(a: P1, b: P2) -> bool {
        let (a, b) = (a.as_ref(), b.as_ref());
        if a == b {
            return true;
        }

        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Write a file through a temporary sibling and move it into place.
    ///
    /// If `write` fails the temporary file is removed and `path` is left
    /// untouched, so readers never see a half-written file. The result gets
    /// the same permissions as a file created with `File::create`.
    pub fn write_atomically<P, F, T>(path: P, write: F) -> Result<T>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufWriter<File>) -> Result<T>,
    {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Same creation mode as File::create, the umask still applies
            builder.permissions(fs::Permissions::from_mode(0o666));
        }

        let temp = builder
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {:?}", dir))?;
        let (file, temp_path) = temp.into_parts();

        let mut writer = BufWriter::new(file);
        let value = write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to write to file: {:?}", path))?;
        drop(writer);

        temp_path
            .persist(path)
            .with_context(|| format!("Failed to write to file: {:?}", path))?;

        Ok(value)
    }
}
