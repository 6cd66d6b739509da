// Configuration layers, lowest precedence first:
// defaults -> TOML file -> environment -> CLI flags (applied by the binary).
use crate::error::{DemoError, IoContext, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE: &str = "file-handling.toml";
pub const DIR_ENV: &str = "FILE_HANDLING_DIR";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub work_dir: PathBuf,
    pub color: bool,
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    work_dir: Option<PathBuf>,
    color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            color: true,
        }
    }
}

impl Config {
    /// Defaults, then `explicit` (must exist) or `file-handling.toml` in the
    /// current directory (optional), then the process environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();
        match explicit {
            Some(path) => config.merge_file(path)?,
            None if Path::new(DEFAULT_FILE).is_file() => {
                config.merge_file(Path::new(DEFAULT_FILE))?
            }
            None => {}
        }
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let source = fs::read_to_string(path).at(path)?;
        self.merge_toml(path, &source)?;
        log::debug!("loaded config from {}", path.display());
        Ok(())
    }

    fn merge_toml(&mut self, path: &Path, source: &str) -> Result<()> {
        let file: FileConfig = toml::from_str(source).map_err(|e| DemoError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let Some(work_dir) = file.work_dir {
            self.work_dir = work_dir;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        Ok(())
    }

    /// `lookup` stands in for `std::env::var` so tests never touch the real environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(DIR_ENV).filter(|d| !d.is_empty()) {
            self.work_dir = PathBuf::from(dir);
        }
        // https://no-color.org: presence alone disables colour
        if lookup(NO_COLOR_ENV).is_some() {
            self.color = false;
        }
    }
}
