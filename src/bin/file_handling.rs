//! # File handling demonstrations
//!
//! ```bash
//! cargo run --bin file-handling -- list
//! cargo run --bin file-handling -- run methods
//! cargo run --bin file-handling -- --dir /tmp run all
//! RUST_LOG=debug cargo run --bin file-handling -- run merge
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use file_handling::{Config, Registry, Workspace};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Independent, runnable file handling examples
#[derive(Parser, Debug)]
#[command(name = "file-handling")]
#[command(about = "Independent, runnable file handling examples")]
struct Args {
    /// Directory the examples create their temporary files in
    #[arg(long, short = 'd', global = true)]
    dir: Option<PathBuf>,

    /// TOML config file (default: ./file-handling.toml if present)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available examples
    List,
    /// Run one example by name, or `all`
    Run {
        /// Example name (see `list`)
        name: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(dir) = args.dir {
        config.work_dir = dir;
    }
    if args.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }
    log::debug!("{:?}", config);

    let registry = Registry::builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::List => registry.list(&mut out)?,
        Command::Run { name } => {
            let ws = Workspace::new(&config.work_dir);
            registry
                .run(&name, &ws, &mut out)
                .with_context(|| format!("example '{}' failed", name))?;
        }
    }
    out.flush()?;
    Ok(())
}
