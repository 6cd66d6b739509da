// Pattern: Path Handling
use crate::error::{IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use path_clean::PathClean;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "ex_path_sample.txt";

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Demonstration: write a file through a Path, check it, and remove it."
    )?;
    let sample = ws.path(FILE_NAME);

    fs::write(&sample, "path sample\n").at(&sample)?;
    writeln!(out, "Path exists? {}", sample.exists())?;
    writeln!(out, "File name: {:?}", sample.file_name().unwrap_or_default())?;
    writeln!(out, "Extension: {:?}", sample.extension().unwrap_or_default())?;

    let absolute = absolute(&sample).at(&sample)?;
    writeln!(out, "{} {}", "Absolute:".cyan(), absolute.display())?;
    // canonicalize also resolves symlinks and requires the file to exist
    let canonical = fs::canonicalize(&sample).at(&sample)?;
    writeln!(out, "{} {}", "Canonical:".cyan(), canonical.display())?;

    ws.remove_file(FILE_NAME)?;
    writeln!(out, "{} {}", "Removed:".green(), FILE_NAME)?;
    writeln!(out, "Path exists? {}", sample.exists())?;
    Ok(())
}

/// Join onto the current dir and drop `.`/`..` lexically. No filesystem access.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.clean());
    }
    Ok(std::env::current_dir()?.join(path).clean())
}
