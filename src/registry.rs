// Registry: map short names to demonstrations and descriptions
use crate::demos::{self, DemoFn};
use crate::error::{DemoError, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fmt;
use std::io::Write;

pub const ALL: &str = "all";

#[derive(Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub description: &'static str,
    /// Shown in the banner before the narration
    pub title: &'static str,
    /// `None` only for the `all` pseudo-entry
    pub run: Option<DemoFn>,
}

impl Example {
    fn new(
        name: &'static str,
        description: &'static str,
        title: &'static str,
        run: DemoFn,
    ) -> Self {
        Self {
            name,
            description,
            title,
            run: Some(run),
        }
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("title", &self.title)
            .field("runnable", &self.run.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    examples: Vec<Example>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            examples: vec![
                Example::new(
                    "write",
                    "Write text & binary files (independent)",
                    "example_write_files",
                    demos::write::run,
                ),
                Example::new(
                    "read",
                    "Create & read a file (independent)",
                    "example_read_files",
                    demos::read::run,
                ),
                Example::new(
                    "rename",
                    "Rename then delete a file (independent)",
                    "example_rename_delete",
                    demos::rename::run,
                ),
                Example::new(
                    "dirs",
                    "Create and remove directories (independent)",
                    "example_directories",
                    demos::dirs::run,
                ),
                Example::new(
                    "methods",
                    "position/seek/truncate example (independent)",
                    "example_file_methods",
                    demos::methods::run,
                ),
                Example::new(
                    "os",
                    "metadata / mkdir / rmdir (independent)",
                    "example_os_file_directory_methods",
                    demos::os::run,
                ),
                Example::new(
                    "path",
                    "Path & absolute path example (independent)",
                    "example_path_methods",
                    demos::path::run,
                ),
                Example::new(
                    "merge",
                    "Merge two text files (independent)",
                    "example_merge_text_files",
                    demos::merge::run,
                ),
                Example {
                    name: ALL,
                    description: "Run all examples one-by-one (independent)",
                    title: "all",
                    run: None,
                },
            ],
        }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn names(&self) -> Vec<String> {
        self.examples.iter().map(|e| e.name.to_string()).collect()
    }

    pub fn get(&self, name: &str) -> Result<&Example> {
        self.examples
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| DemoError::UnknownExample {
                name: name.to_string(),
                available: self.names(),
            })
    }

    pub fn list(&self, out: &mut dyn Write) -> Result<()> {
        let width = self.examples.iter().map(|e| e.name.len()).max().unwrap_or(0);
        writeln!(out, "Available examples:")?;
        for example in &self.examples {
            // pad before colouring, escape codes would throw the width off
            let name = format!("{:width$}", example.name, width = width);
            writeln!(out, "  {}  {}", name.bold(), example.description)?;
        }
        Ok(())
    }

    /// Run one entry, or every runnable entry in order for `all`.
    /// `all` stops at the first failure.
    pub fn run(&self, name: &str, ws: &Workspace, out: &mut dyn Write) -> Result<()> {
        let example = self.get(name)?;
        match example.run {
            Some(run) => Self::run_one(example, run, ws, out),
            None => {
                for example in &self.examples {
                    if let Some(run) = example.run {
                        Self::run_one(example, run, ws, out)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn run_one(
        example: &Example,
        run: DemoFn,
        ws: &Workspace,
        out: &mut dyn Write,
    ) -> Result<()> {
        log::info!("running '{}' in {}", example.name, ws.root().display());
        writeln!(out, "\n{}", format!("--- {} ---", example.title).yellow().bold())?;
        run(ws, out)?;
        log::info!("'{}' finished", example.name);
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_names_in_order() {
        assert_eq!(
            Registry::builtin().names(),
            vec!["write", "read", "rename", "dirs", "methods", "os", "path", "merge", "all"]
        );
    }

    #[test]
    fn test_titles_match_functions() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("methods").unwrap().title, "example_file_methods");
        assert_eq!(
            registry.get("merge").unwrap().description,
            "Merge two text files (independent)"
        );
        for example in registry.examples().iter().filter(|e| e.run.is_some()) {
            assert!(example.title.starts_with("example_"), "{}", example.name);
            assert!(example.description.ends_with("(independent)"), "{}", example.name);
        }
    }

    #[test]
    fn test_only_all_has_no_function() {
        for example in Registry::builtin().examples() {
            assert_eq!(example.run.is_none(), example.name == ALL, "{}", example.name);
        }
    }

    #[test]
    fn test_get_unknown() {
        match Registry::builtin().get("bogus") {
            Err(DemoError::UnknownExample { name, available }) => {
                assert_eq!(name, "bogus");
                assert!(available.contains(&"methods".to_string()));
            }
            other => panic!("Expected UnknownExample, got {:?}", other),
        }
    }

    #[test]
    fn test_list_shows_every_entry() {
        let mut out = Vec::new();
        Registry::builtin().list(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        for example in Registry::builtin().examples() {
            assert!(output.contains(example.name));
            assert!(output.contains(example.description));
        }
    }

    #[test]
    fn test_run_methods_prints_banner() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        let mut out = Vec::new();

        Registry::builtin().run("methods", &ws, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("--- example_file_methods ---"));
        assert!(output.contains("After truncate, content: 01234"));
    }

    #[test]
    fn test_run_all_leaves_workspace_empty() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        let mut out = Vec::new();

        Registry::builtin().run(ALL, &ws, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        for example in Registry::builtin().examples().iter().filter(|e| e.run.is_some()) {
            assert!(output.contains(example.title), "missing {}", example.title);
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_all_stops_at_first_failure() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path().join("missing"));
        let mut out = Vec::new();

        assert!(Registry::builtin().run(ALL, &ws, &mut out).is_err());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("example_write_files"));
        assert!(!output.contains("example_read_files"));
    }
}
