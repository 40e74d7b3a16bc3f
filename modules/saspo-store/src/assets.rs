use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use saspo_common::{is_plain_filename, CmsError};

/// The directory of uploaded media served under `/static/img`.
#[derive(Debug, Clone)]
pub struct AssetFolder {
    dir: PathBuf,
}

impl AssetFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ensure_exists(&self) -> Result<(), CmsError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// File names in the folder, sorted. A missing folder lists as empty.
    pub fn list(&self) -> Vec<String> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Failed to list asset folder");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    pub fn exists(&self, name: &str) -> bool {
        is_plain_filename(name) && self.dir.join(name).is_file()
    }

    /// Write `bytes` as `name`, replacing any existing file of that name.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, CmsError> {
        if !is_plain_filename(name) {
            return Err(CmsError::Validation(format!("invalid asset name: {name}")));
        }
        self.ensure_exists()?;
        let path = self.dir.join(name);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    pub fn remove(&self, name: &str) -> Result<(), CmsError> {
        if !is_plain_filename(name) {
            return Err(CmsError::Validation(format!("invalid asset name: {name}")));
        }
        std::fs::remove_file(self.dir.join(name))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_sorted_and_skips_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = AssetFolder::new(tmp.path());
        folder.write("b.png", b"b").unwrap();
        folder.write("A.png", b"a").unwrap();
        folder.write("a.mp4", b"a").unwrap();
        std::fs::create_dir(tmp.path().join("nested")).unwrap();

        assert_eq!(folder.list(), vec!["A.png", "a.mp4", "b.png"]);
    }

    #[test]
    fn missing_folder_lists_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = AssetFolder::new(tmp.path().join("img"));
        assert!(folder.list().is_empty());
    }

    #[test]
    fn write_rejects_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let folder = AssetFolder::new(tmp.path());
        assert!(matches!(
            folder.write("../escape.png", b"x"),
            Err(CmsError::Validation(_))
        ));
        assert!(!tmp.path().parent().unwrap().join("escape.png").exists());
    }
}
