//! Engine commands
//!
//! One whitespace-split input line maps to one `Command`; parsing
//! validates arity and argument types so dispatch receives only
//! well-formed requests.

use dct2_core::consts::{DEFAULT_BLOCK_SIZE, DEFAULT_CUTOFF, DEFAULT_MAX_SIZE_EXP};
use dct2_core::{Dct2Error, Dct2Result};
use std::path::PathBuf;

/// Available command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display the identifier string of the engine
    Info,
    /// List commands, or show help for a specific one
    Help(Option<String>),
    /// Compare the naive and fast DCT2 over doubling sizes up to 2^max_exp
    Dct { max_exp: u32 },
    /// Compress a grayscale raster and export the pipeline step images
    Bmp {
        path: PathBuf,
        block_size: usize,
        cutoff: usize,
        out_dir: PathBuf,
    },
    /// Leave the engine
    Exit,
}

fn too_many(command: &str) -> Dct2Error {
    Dct2Error::Parameter(format!("too many arguments for command '{}'", command))
}

fn numeric<T: std::str::FromStr>(word: &str, what: &str) -> Dct2Result<T> {
    word.parse()
        .map_err(|_| Dct2Error::Parameter(format!("{} must be a number, got '{}'", what, word)))
}

impl Command {
    /// Parses one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Dct2Result<Option<Command>> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            [] => return Ok(None),
            ["info"] => Command::Info,
            ["help"] => Command::Help(None),
            ["help", topic] => Command::Help(Some((*topic).to_string())),
            ["help", ..] => return Err(too_many("help")),
            ["dct"] => Command::Dct {
                max_exp: DEFAULT_MAX_SIZE_EXP,
            },
            ["dct", exp] => Command::Dct {
                max_exp: numeric(exp, "size exponent")?,
            },
            ["dct", ..] => return Err(too_many("dct")),
            ["bmp"] => {
                return Err(Dct2Error::Parameter(
                    "command 'bmp' requires an image path".to_string(),
                ))
            }
            ["bmp", path] => Command::Bmp {
                path: PathBuf::from(path),
                block_size: DEFAULT_BLOCK_SIZE,
                cutoff: DEFAULT_CUTOFF,
                out_dir: PathBuf::from("."),
            },
            ["bmp", path, f] => Command::Bmp {
                path: PathBuf::from(path),
                block_size: numeric(f, "block size F")?,
                cutoff: DEFAULT_CUTOFF,
                out_dir: PathBuf::from("."),
            },
            ["bmp", path, f, d] => Command::Bmp {
                path: PathBuf::from(path),
                block_size: numeric(f, "block size F")?,
                cutoff: numeric(d, "threshold d")?,
                out_dir: PathBuf::from("."),
            },
            ["bmp", path, f, d, out_dir] => Command::Bmp {
                path: PathBuf::from(path),
                block_size: numeric(f, "block size F")?,
                cutoff: numeric(d, "threshold d")?,
                out_dir: PathBuf::from(out_dir),
            },
            ["bmp", ..] => return Err(too_many("bmp")),
            ["exit"] => Command::Exit,
            _ => {
                return Err(Dct2Error::Parameter(
                    "invalid command; try 'help' to see a list of valid commands".to_string(),
                ))
            }
        };
        Ok(Some(command))
    }
}
