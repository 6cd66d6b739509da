use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can go wrong while running a demonstration.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Output(#[from] io::Error),

    #[error("unknown example '{name}' (available: {})", .available.join(", "))]
    UnknownExample { name: String, available: Vec<String> },

    #[error("invalid config file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl DemoError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Attach the offending path to a raw `io::Result`.
pub trait IoContext<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| DemoError::io(path, e))
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
