// Pattern: Reading a Whole File
use crate::error::{IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fs;
use std::io::Write;

pub const FILE_NAME: &str = "ex_read.txt";
pub const CONTENT: &str = "This file is created by the read example\nLine 2\n";

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Demonstration: create a text file, read its full content, then delete it."
    )?;
    let path = ws.path(FILE_NAME);

    // Create it first so the read always has something to find
    fs::write(&path, CONTENT).at(&path)?;
    writeln!(out, "{} {}", "Created for reading:".green(), FILE_NAME)?;

    let content = read_all(ws)?;
    writeln!(out, "Content:\n{}", content)?;

    ws.remove_file(FILE_NAME)?;
    writeln!(out, "{} {}", "Removed:".green(), FILE_NAME)?;
    Ok(())
}

fn read_all(ws: &Workspace) -> Result<String> {
    let path = ws.path(FILE_NAME);
    log::debug!("read_to_string {}", path.display());
    fs::read_to_string(&path).at(&path)
}
