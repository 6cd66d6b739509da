// Pattern: Rename, then Delete
use crate::error::{IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fs;
use std::io::Write;

pub const SOURCE: &str = "ex_rename_src.txt";
pub const DESTINATION: &str = "ex_rename_dst.txt";

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Demonstration: create a file, rename it, then delete it.")?;
    let src = ws.path(SOURCE);
    let dst = ws.path(DESTINATION);

    fs::write(&src, "rename me\n").at(&src)?;
    writeln!(out, "{} {}", "Created:".green(), SOURCE)?;

    // Replaces dst if it exists; same filesystem only
    log::debug!("rename {} -> {}", src.display(), dst.display());
    fs::rename(&src, &dst).at(&src)?;
    writeln!(out, "{} {}", "Renamed ->".green(), DESTINATION)?;
    writeln!(
        out,
        "{} exists: {}, {} exists: {}",
        SOURCE,
        src.exists(),
        DESTINATION,
        dst.exists()
    )?;

    ws.remove_file(DESTINATION)?;
    writeln!(out, "{} {}", "Deleted:".green(), DESTINATION)?;
    Ok(())
}
