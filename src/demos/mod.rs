//! One module per demonstration. Each exposes
//! `run(&Workspace, &mut dyn Write) -> Result<()>`, narrates to the writer,
//! and removes everything it created before returning `Ok`.

pub mod dirs;
pub mod merge;
pub mod methods;
pub mod os;
pub mod path;
pub mod read;
pub mod rename;
pub mod write;

use crate::error::Result;
use crate::workspace::Workspace;
use std::io::Write;

pub type DemoFn = fn(&Workspace, &mut dyn Write) -> Result<()>;
