// Every demonstration creates its temporary files under a Workspace root,
// so the binary can point at any directory and tests can use a tempdir.
use crate::error::{IoContext, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Wrap an existing directory. Nothing is created here; a missing root
    /// shows up as an I/O error on the first file a demonstration opens.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }

    pub fn exists(&self, name: impl AsRef<Path>) -> bool {
        self.path(name).exists()
    }

    pub fn remove_file(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.path(name);
        log::debug!("remove_file {}", path.display());
        fs::remove_file(&path).at(&path)?;
        Ok(path)
    }

    pub fn remove_dir_all(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.path(name);
        log::debug!("remove_dir_all {}", path.display());
        fs::remove_dir_all(&path).at(&path)?;
        Ok(path)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(".")
    }
}
