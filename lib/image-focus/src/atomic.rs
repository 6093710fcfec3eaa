//! Replace a file's content without ever exposing a half-written file.
//!
//! The new content goes into a sibling temporary file (same directory, so the
//! same filesystem) and is moved over the target with a single `rename` on
//! [`AtomicReplace::commit`]. Dropping the guard without committing deletes
//! the temporary file and leaves the target untouched.

use crate::{ImageFocusError, ImageFocusResult};
use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct AtomicReplace {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicReplace {
    /// The temporary file is named after the target with `suffix` appended.
    pub fn new(target: impl AsRef<Path>, suffix: &str) -> ImageFocusResult<Self> {
        let target = target.as_ref().to_path_buf();
        let name = target
            .file_name()
            .ok_or_else(|| ImageFocusError::InvalidPath(target.clone()))?;

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp = tempfile::Builder::new()
            .prefix(name)
            .suffix(suffix)
            .tempfile_in(&dir)?;

        log::debug!(
            "Staging {} through {}",
            target.display(),
            temp.path().display()
        );

        Ok(Self { target, temp })
    }

    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    pub fn file_mut(&mut self) -> &mut File {
        self.temp.as_file_mut()
    }

    /// Syncs the staged content and renames it over the target.
    pub fn commit(self) -> ImageFocusResult<()> {
        let Self { target, temp } = self;

        temp.as_file().sync_all()?;

        // Temporary files are created owner-only; keep the target's mode.
        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(temp.path(), meta.permissions())?;
        }

        temp.persist(&target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    #[test]
    fn test_commit_replaces_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("photo.png");
        fs::write(&target, b"old").unwrap();

        let mut pending = AtomicReplace::new(&target, "_sharpened").unwrap();
        let temp_path = pending.temp_path().to_path_buf();
        assert_eq!(temp_path.parent(), Some(dir.path()));

        let temp_name = temp_path.file_name().unwrap().to_string_lossy().to_string();
        assert!(temp_name.starts_with("photo.png"));
        assert!(temp_name.ends_with("_sharpened"));

        pending.file_mut().write_all(b"new").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"old");

        pending.commit().unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"new");
        assert!(!temp_path.exists());
        assert_eq!(entries(dir.path()), vec!["photo.png".to_string()]);
    }

    #[test]
    fn test_drop_rolls_back() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("photo.png");
        fs::write(&target, b"old").unwrap();

        {
            let mut pending = AtomicReplace::new(&target, "_sharpened").unwrap();
            pending.file_mut().write_all(b"partial").unwrap();
        }

        assert_eq!(fs::read(&target).unwrap(), b"old");
        assert_eq!(entries(dir.path()), vec!["photo.png".to_string()]);
    }

    #[test]
    fn test_commit_creates_missing_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("fresh.bin");

        let mut pending = AtomicReplace::new(&target, ".tmp").unwrap();
        pending.file_mut().write_all(b"data").unwrap();
        pending.commit().unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"data");
    }

    #[cfg(unix)]
    #[test]
    fn test_commit_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("shared.png");
        fs::write(&target, b"old").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        let mut pending = AtomicReplace::new(&target, "_sharpened").unwrap();
        pending.file_mut().write_all(b"new").unwrap();
        pending.commit().unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(matches!(
            AtomicReplace::new("/", "_sharpened"),
            Err(ImageFocusError::InvalidPath(_))
        ));
    }
}
