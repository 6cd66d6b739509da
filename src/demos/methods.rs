// Pattern: File Cursor Methods
// write, flush, position, seek, read, truncate on a single read+write handle.
use crate::error::{DemoError, IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

pub const FILE_NAME: &str = "ex_methods.txt";
pub const PAYLOAD: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ\n";
pub const HEAD_LEN: usize = 10;
pub const TRUNCATE_TO: u64 = 5;

/// What the cursor walk observed, for callers that want more than narration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorReport {
    pub position_after_write: u64,
    pub head: String,
    pub after_truncate: String,
}

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    file_methods(ws, out).map(|_| ())
}

/// Walk the cursor through the temp file, then delete it no matter what.
/// The first error wins: a failed step is reported even if removal also fails.
pub fn file_methods(ws: &Workspace, out: &mut dyn Write) -> Result<CursorReport> {
    writeln!(
        out,
        "Demonstration: write to file, inspect and move pointer, truncate file."
    )?;
    let path = ws.path(FILE_NAME);

    let report = walk_cursor(&path, out);
    let removed = ws.remove_file(FILE_NAME);

    let report = report?;
    removed?;
    writeln!(out, "{} {}", "Removed:".green(), FILE_NAME)?;
    Ok(report)
}

fn walk_cursor(path: &Path, out: &mut dyn Write) -> Result<CursorReport> {
    // read + write, create, and drop whatever a previous run left behind
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .at(path)?;
    log::debug!("opened {} read+write", path.display());

    file.write_all(PAYLOAD).at(path)?;
    file.flush().at(path)?;
    file.sync_data().at(path)?;
    writeln!(out, "Wrote and flushed to {}", FILE_NAME)?;

    let position_after_write = file.stream_position().at(path)?;
    writeln!(out, "{} {}", "position ->".cyan(), position_after_write)?;

    file.seek(SeekFrom::Start(0)).at(path)?;
    let mut head = [0u8; HEAD_LEN];
    file.read_exact(&mut head).at(path)?;
    let head = ascii(path, &head)?;
    writeln!(out, "First {} bytes: {}", HEAD_LEN, head)?;

    // set_len does not move the cursor, so rewind on both sides of it
    file.seek(SeekFrom::Start(0)).at(path)?;
    file.set_len(TRUNCATE_TO).at(path)?;
    file.seek(SeekFrom::Start(0)).at(path)?;
    let mut rest = Vec::new();
    file.read_to_end(&mut rest).at(path)?;
    let after_truncate = ascii(path, &rest)?;
    writeln!(out, "After truncate, content: {}", after_truncate)?;

    Ok(CursorReport {
        position_after_write,
        head,
        after_truncate,
    })
}

fn ascii(path: &Path, bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        DemoError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run_in(ws: &Workspace) -> (CursorReport, String) {
        let mut out = Vec::new();
        let report = file_methods(ws, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_position_equals_payload_length() {
        let dir = tempdir().unwrap();
        let (report, _) = run_in(&Workspace::new(dir.path()));
        assert_eq!(report.position_after_write, PAYLOAD.len() as u64);
    }

    #[test]
    fn test_reads_first_ten_bytes() {
        let dir = tempdir().unwrap();
        let (report, output) = run_in(&Workspace::new(dir.path()));
        assert_eq!(report.head, "0123456789");
        assert!(output.contains("First 10 bytes: 0123456789"));
    }

    #[test]
    fn test_truncate_keeps_first_five_bytes() {
        let dir = tempdir().unwrap();
        let (report, output) = run_in(&Workspace::new(dir.path()));
        assert_eq!(report.after_truncate, "01234");
        assert!(output.contains("After truncate, content: 01234"));
    }

    #[test]
    fn test_file_is_removed() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        run_in(&ws);
        assert!(!ws.exists(FILE_NAME));
    }

    #[test]
    fn test_stale_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        let stale = "leftover from an earlier crash, much longer than the payload";
        fs::write(ws.path(FILE_NAME), stale).unwrap();

        let (report, _) = run_in(&ws);
        assert_eq!(report.position_after_write, PAYLOAD.len() as u64);
        assert!(!ws.exists(FILE_NAME));
    }

    #[test]
    fn test_two_runs_print_the_same() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        let (first_report, first) = run_in(&ws);
        let (second_report, second) = run_in(&ws);
        assert_eq!(first_report, second_report);
        assert_eq!(first, second);
    }

    /// Accepts `lines` writes, then fails every write after that.
    struct FailingWriter {
        lines: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.lines == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
            }
            if buf.contains(&b'\n') {
                self.lines -= 1;
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_file_removed_when_a_later_step_fails() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        // intro and "Wrote and flushed" succeed, the position line fails
        let mut out = FailingWriter { lines: 2 };

        match file_methods(&ws, &mut out) {
            Err(DemoError::Output(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("Expected Output error, got {:?}", other),
        }
        assert!(!ws.exists(FILE_NAME));
    }

    #[test]
    fn test_uncreatable_file_fails() {
        let dir = tempdir().unwrap();
        let ws = Workspace::new(dir.path().join("does/not/exist"));
        let mut out = Vec::new();

        match file_methods(&ws, &mut out) {
            Err(DemoError::Io { path, source }) => {
                assert!(path.ends_with(FILE_NAME));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
