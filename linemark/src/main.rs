//! Linemark - toggle markdown line markers from the command line
//!
//! A thin host adapter around linemark-core: it owns file I/O and
//! argument handling and delegates every transformation to the engine.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use linemark_core::commands::{commands_for, find_command};
use linemark_core::host::handle_toggle;
use linemark_core::{Buffer, Config, CursorHost};
use std::path::PathBuf;

/// Toggle markdown line markers
#[derive(Parser, Debug)]
#[command(name = "linemark")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available toggle commands
    List,
    /// Toggle a marker on a file line or on a text argument
    Toggle {
        /// Marker command id (see `linemark list`)
        #[arg(long, short)]
        marker: String,

        /// Line number to toggle, zero-based
        #[arg(long, short)]
        line: Option<usize>,

        /// Toggle this text instead of a file line (selection mode)
        #[arg(long, short, conflicts_with_all = ["line", "write", "file"])]
        text: Option<String>,

        /// Write the result back to the file instead of stdout
        #[arg(long, short)]
        write: bool,

        /// Path to markdown file
        #[arg(value_name = "FILE", required_unless_present = "text")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;
    let commands = commands_for(&config);

    match args.command {
        Command::List => {
            for cmd in &commands {
                println!("{:<12} {}", cmd.id, cmd.name);
            }
        }
        Command::Toggle {
            marker,
            line,
            text,
            write,
            file,
        } => {
            let Some(cmd) = find_command(&commands, &marker) else {
                bail!("Unknown marker '{}', try `linemark list`", marker);
            };

            if let Some(text) = text {
                // Selection mode: toggle the argument text directly
                let mut buffer = Buffer::from_str("");
                let mut host = CursorHost::new(&mut buffer, 0, Some(text));
                if !handle_toggle(&mut host, &cmd.spec) {
                    bail!("Nothing to toggle: text is blank");
                }
                if let Some(resolved) = host.into_selection() {
                    println!("{}", resolved);
                }
                return Ok(());
            }

            let file = file.context("FILE is required unless --text is given")?;
            let line = line.context("--line is required unless --text is given")?;

            let mut buffer = Buffer::load(&file)
                .with_context(|| format!("Failed to load document: {}", file.display()))?;
            if line >= buffer.line_count() {
                bail!(
                    "Line {} out of range: {} has {} lines",
                    line,
                    file.display(),
                    buffer.line_count()
                );
            }

            let mut host = CursorHost::new(&mut buffer, line, None);
            if !handle_toggle(&mut host, &cmd.spec) {
                bail!("Nothing to toggle: line {} is blank", line);
            }

            if write {
                buffer.save()?;
            } else {
                print!("{}", buffer);
            }
        }
    }

    Ok(())
}
