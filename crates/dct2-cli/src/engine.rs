//! Engine command dispatch
//!
//! Dispatch is a pure function from a parsed command to its textual
//! output; the REPL in `main` owns all terminal I/O and there is no
//! engine state between commands.

use crate::command::Command;
use crate::raster::{export_steps, load_intensity};
use anyhow::Result;
use dct2_bench::{benchmark, default_sizes, format_table};
use dct2_pipeline::{compress, CompressorOptions};
use std::path::Path;

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of dispatching one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Text for the REPL to print
    pub output: String,
    /// Whether the engine loop should stop
    pub quit: bool,
}

impl Dispatch {
    fn text(output: String) -> Self {
        Self {
            output,
            quit: false,
        }
    }
}

/// Executes one command and returns its output.
pub fn dispatch(command: Command) -> Result<Dispatch> {
    match command {
        Command::Info => Ok(Dispatch::text(info_text())),
        Command::Help(topic) => Ok(Dispatch::text(help_text(topic.as_deref())?)),
        Command::Dct { max_exp } => run_dct(max_exp),
        Command::Bmp {
            path,
            block_size,
            cutoff,
            out_dir,
        } => run_bmp(&path, block_size, cutoff, &out_dir),
        Command::Exit => Ok(Dispatch {
            output: String::new(),
            quit: true,
        }),
    }
}

pub fn info_text() -> String {
    format!("dct2 engine v{}", VERSION)
}

fn help_text(topic: Option<&str>) -> Result<String> {
    let text = match topic {
        None => "Available commands:\n  \
                 info\n  \
                 help\n  \
                 dct\n  \
                 bmp\n  \
                 exit\n\
                 Try 'help <command>' to see help for a particular command"
            .to_string(),
        Some("info") => "  info\n\n  Displays the identifier string of the engine.".to_string(),
        Some("help") => "  help\n  help [command]\n\n  \
                         Displays the list of available commands. If a command is \
                         specified, displays the help for that command."
            .to_string(),
        Some("dct") => "  dct\n  dct [n]\n\n  \
                        Compares the naive O(N^3) DCT2 to the fast O(N^2 log N) \
                        implementation. The comparison runs for NxN arrays with N \
                        starting from 2^3 and doubling up to 2^n (n defaults to 12)."
            .to_string(),
        Some("bmp") => "  bmp <image> [F] [d] [out_dir]\n\n  \
                        Compresses a grayscale image with JPEG-like compression \
                        using FxF blocks and frequency cutoff d (defaults F=8, \
                        d=10), then saves the pipeline step images into out_dir \
                        (defaults to the current directory)."
            .to_string(),
        Some("exit") => "  exit\n\n  Exits the engine.".to_string(),
        Some(other) => anyhow::bail!("unknown command '{}'", other),
    };
    Ok(text)
}

fn run_dct(max_exp: u32) -> Result<Dispatch> {
    let sizes = default_sizes(max_exp);
    let records = benchmark(&sizes)?;
    Ok(Dispatch::text(format!(
        "Benchmark summary:\n{}",
        format_table(&records)
    )))
}

fn run_bmp(path: &Path, block_size: usize, cutoff: usize, out_dir: &Path) -> Result<Dispatch> {
    let image = load_intensity(path)?;
    let options = CompressorOptions::new().block_size(block_size).cutoff(cutoff);
    let artifacts = compress(&image, &options)?;
    let saved = export_steps(&artifacts, path, out_dir)?;
    Ok(Dispatch::text(format!(
        "Compressed {} ({}x{} cropped to {}x{}, F={}, d={})\nSaved {} step images to {}",
        path.display(),
        image.rows(),
        image.cols(),
        artifacts.cropped.rows(),
        artifacts.cropped.cols(),
        block_size,
        cutoff,
        saved.len(),
        out_dir.display()
    )))
}
