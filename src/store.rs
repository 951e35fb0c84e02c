//! Save-directory access for persisted map cell files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-system operations the deletion pass needs.
///
/// The pass only ever checks existence and removes; nothing is created or
/// written.
pub trait MapFiles {
    fn exists(&self, name: &str) -> bool;
    fn remove(&self, name: &str) -> io::Result<()>;
}

/// A game save directory containing `map_{x}_{y}.bin` files.
pub struct SaveDir {
    base: PathBuf,
}

impl SaveDir {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }
}

impl MapFiles for SaveDir {
    fn exists(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.file_path(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exists_and_remove() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("map_3_4.bin"), b"cell").unwrap();

        let store = SaveDir::new(dir.path());
        assert!(store.exists("map_3_4.bin"));

        store.remove("map_3_4.bin").unwrap();
        assert!(!store.exists("map_3_4.bin"));
    }

    #[test]
    fn test_exists_false_for_missing_file() {
        let dir = tempdir().unwrap();
        let store = SaveDir::new(dir.path());
        assert!(!store.exists("map_0_0.bin"));
    }

    #[test]
    fn test_remove_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let store = SaveDir::new(dir.path());
        assert!(store.remove("map_0_0.bin").is_err());
    }
}
