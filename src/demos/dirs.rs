// Pattern: Directory Operations
// create_dir_all (mkdir -p), list a directory, walk a tree, remove_dir_all (rm -rf).
use crate::error::{DemoError, IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DIR_NAME: &str = "ex_dir_folder";
pub const SUB_DIR: &str = "sub";
pub const LIST_LIMIT: usize = 10;

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Demonstration: create nested directories, list, then remove them."
    )?;
    let nested = ws.path(DIR_NAME).join(SUB_DIR);

    // Creates parents as needed; succeeds if it already exists
    fs::create_dir_all(&nested).at(&nested)?;
    writeln!(out, "{} {} with {}/", "Created:".green(), DIR_NAME, SUB_DIR)?;

    let names = list_dir(ws.root(), LIST_LIMIT)?;
    writeln!(
        out,
        "Listing workspace (first {} entries): {:?}",
        LIST_LIMIT, names
    )?;

    writeln!(out, "Tree of {}:", DIR_NAME)?;
    for entry in walk_tree(&ws.path(DIR_NAME))? {
        writeln!(out, "  {}", entry.display())?;
    }

    ws.remove_dir_all(DIR_NAME)?;
    writeln!(out, "{} {}", "Removed directory tree:".green(), DIR_NAME)?;
    Ok(())
}

/// File names in `dir`, sorted, at most `limit` of them.
pub fn list_dir(dir: &Path, limit: usize) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)
        .at(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .at(dir)?;
    names.sort();
    names.truncate(limit);
    Ok(names)
}

/// Every entry below `root`, relative to it, depth-first in name order.
pub fn walk_tree(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            DemoError::io(path, e.into())
        })?;
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        entries.push(relative.to_path_buf());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_lists_and_removes_tree() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        let mut out = Vec::new();

        run(&ws, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[\"ex_dir_folder\"]"));
        assert!(output.contains("  sub"));
        assert!(!ws.exists(DIR_NAME));
    }

    #[test]
    fn test_list_dir_sorts_and_limits() {
        let dir = tempdir().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        assert_eq!(list_dir(dir.path(), 2).unwrap(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_walk_tree_is_relative_and_ordered() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/inner")).unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let entries = walk_tree(dir.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b"),
                PathBuf::from("b/inner"),
            ]
        );
    }

    #[test]
    fn test_existing_tree_is_fine() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        fs::create_dir_all(ws.path(DIR_NAME).join(SUB_DIR)).unwrap();

        run(&ws, &mut Vec::new()).unwrap();
        assert!(!ws.exists(DIR_NAME));
    }
}
