// Pattern: Merging Files
// Stream each input into one output through a buffer instead of reading it all first.
use crate::error::{IoContext, Result};
use crate::workspace::Workspace;
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const INPUT_A: &str = "ex_merge_a.txt";
pub const INPUT_B: &str = "ex_merge_b.txt";
pub const OUTPUT: &str = "ex_merged.txt";

pub fn run(ws: &Workspace, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Demonstration: create two text files, merge them into a third file."
    )?;
    let a = ws.path(INPUT_A);
    let b = ws.path(INPUT_B);
    let merged = ws.path(OUTPUT);

    fs::write(&a, "Content A\n").at(&a)?;
    fs::write(&b, "Content B\n").at(&b)?;

    let bytes = merge_files(&[a.as_path(), b.as_path()], &merged)?;
    writeln!(out, "{} {} ({} bytes)", "Created merged:".green(), OUTPUT, bytes)?;
    let content = fs::read_to_string(&merged).at(&merged)?;
    writeln!(out, "Merged content:\n{}", content)?;

    for name in [INPUT_A, INPUT_B, OUTPUT] {
        ws.remove_file(name)?;
        writeln!(out, "{} {}", "Removed:".green(), name)?;
    }
    Ok(())
}

/// Concatenate `inputs` into `output` in order, replacing it. Returns bytes written.
pub fn merge_files(inputs: &[&Path], output: &Path) -> Result<u64> {
    let mut writer = BufWriter::new(File::create(output).at(output)?);
    let mut total = 0;
    for input in inputs {
        let reader = File::open(input).at(input)?;
        let copied = copy_into(input, reader, output, &mut writer)?;
        log::debug!("merged {} bytes from {}", copied, input.display());
        total += copied;
    }
    // BufWriter swallows errors on drop, so flush explicitly
    writer.flush().at(output)?;
    Ok(total)
}

// Like io::copy, but read failures name the input and write failures the output
fn copy_into(input: &Path, reader: File, output: &Path, writer: &mut impl Write) -> Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut copied = 0;
    loop {
        let chunk = reader.fill_buf().at(input)?;
        if chunk.is_empty() {
            return Ok(copied);
        }
        let len = chunk.len();
        writer.write_all(chunk).at(output)?;
        reader.consume(len);
        copied += len as u64;
    }
}
