// Pattern: Metadata, Permissions, mkdir/rmdir
use crate::error::{IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use filetime::FileTime;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub const FILE_NAME: &str = "ex_osfile.txt";
pub const DIR_NAME: &str = "ex_os_dir";
pub const CONTENT: &str = "os methods\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub size: u64,
    pub modified: FileTime,
    pub readable: bool,
    pub readonly: bool,
}

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Demonstration: get file metadata, check access, create/remove a dir."
    )?;
    let path = ws.path(FILE_NAME);
    fs::write(&path, CONTENT).at(&path)?;

    let info = inspect(&path)?;
    writeln!(
        out,
        "{} size: {} mtime: {}",
        "metadata ->".cyan(),
        info.size,
        info.modified.unix_seconds()
    )?;
    writeln!(out, "Readable: {}", info.readable)?;
    writeln!(out, "Read-only: {}", info.readonly)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&path).at(&path)?.permissions().mode();
        writeln!(out, "Mode: {:o}", mode & 0o777)?;
    }

    // create_dir fails if the parent is missing or the dir already exists;
    // remove_dir fails unless it is empty
    let dir = ws.path(DIR_NAME);
    fs::create_dir(&dir).at(&dir)?;
    writeln!(out, "{} {}", "Created dir:".green(), DIR_NAME)?;
    fs::remove_dir(&dir).at(&dir)?;
    writeln!(out, "{} {}", "Removed dir:".green(), DIR_NAME)?;

    ws.remove_file(FILE_NAME)?;
    writeln!(out, "{} {}", "Removed file:".green(), FILE_NAME)?;
    Ok(())
}

/// Size, mtime and access bits of a file.
pub fn inspect(path: &Path) -> Result<FileInfo> {
    let metadata = fs::metadata(path).at(path)?;
    log::debug!("metadata {} -> {} bytes", path.display(), metadata.len());
    Ok(FileInfo {
        size: metadata.len(),
        modified: FileTime::from_last_modification_time(&metadata),
        // Actually opening it is the only portable readability check
        readable: File::open(path).is_ok(),
        readonly: metadata.permissions().readonly(),
    })
}
