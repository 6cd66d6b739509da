//! Self-contained file handling demonstrations: writing, reading, renaming,
//! directories, cursor methods (position/seek/truncate), metadata, paths and
//! merging. Every demonstration cleans up after itself.

pub mod config;
pub mod demos;
pub mod error;
pub mod registry;
pub mod workspace;

pub use config::Config;
pub use error::{DemoError, Result};
pub use registry::{Example, Registry};
pub use workspace::Workspace;
