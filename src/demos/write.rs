// Pattern: Writing Text and Binary Files
use crate::error::{IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fs::File;
use std::io::Write;

pub const TEXT_FILE: &str = "ex_write.txt";
pub const BINARY_FILE: &str = "ex_write.bin";
pub const TEXT: &str = "Hello — this file was created by the write example\n";

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Demonstration: create a text file with text content, and a binary file."
    )?;

    // File::create truncates an existing file, like OpenOptions write+create+truncate
    let text_path = ws.path(TEXT_FILE);
    let mut file = File::create(&text_path).at(&text_path)?;
    file.write_all(TEXT.as_bytes()).at(&text_path)?;
    drop(file);
    writeln!(out, "{} {}", "Created:".green(), TEXT_FILE)?;

    // Raw bytes 0..8, no encoding involved
    let binary_path = ws.path(BINARY_FILE);
    let bytes: Vec<u8> = (0u8..8).collect();
    std::fs::write(&binary_path, &bytes).at(&binary_path)?;
    writeln!(out, "{} {}", "Created binary:".green(), BINARY_FILE)?;

    for name in [TEXT_FILE, BINARY_FILE] {
        ws.remove_file(name)?;
        writeln!(out, "{} {}", "Removed:".green(), name)?;
    }
    Ok(())
}
