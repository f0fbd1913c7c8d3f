//! Command-line argument definition and resolution.
//!
//! [`Args`] is the raw clap surface. [`Args::resolve`] turns it into a
//! [`Settings`] value: mode, inputs and outputs with the `-` sentinels
//! translated, the file policy, worker count and codec strategy.
//!
//! Positional arguments follow the `input [output]` convention unless `-m`
//! or `-r` is given, in which case every positional argument is an input and
//! output names are derived automatically.

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::{ArgAction, Parser};

use crate::cli::op_mode::OpMode;
use crate::config::{init_nb_workers, init_strategy, Strategy, NB_WORKERS_MAX};
use crate::file::{FileOptions, STDIN_MARK, STDOUT_MARK};
use crate::util::file_list::{create_file_list, Select};

/// Default display level before `-v` / `-q` adjustments.
const DEFAULT_DISPLAY_LEVEL: u32 = 2;

/// LZFSE file compressor.
#[derive(Debug, Parser)]
#[command(name = "lzfsekit", version, about = "Compress or decompress files with LZFSE")]
pub struct Args {
    /// Force compression.
    #[arg(short = 'z', long, conflicts_with_all = ["decompress", "test"])]
    pub compress: bool,

    /// Decompress.
    #[arg(short = 'd', long, visible_alias = "uncompress", conflicts_with = "test")]
    pub decompress: bool,

    /// Test compressed file integrity.
    #[arg(short = 't', long)]
    pub test: bool,

    /// Write to standard output.
    #[arg(short = 'c', long = "stdout", visible_alias = "to-stdout")]
    pub stdout: bool,

    /// Overwrite existing output files.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Keep source files (default).
    #[arg(short = 'k', long, overrides_with = "rm")]
    pub keep: bool,

    /// Remove source files after success.
    #[arg(long, overrides_with = "keep")]
    pub rm: bool,

    /// Treat every positional argument as an input file.
    #[arg(short = 'm', long)]
    pub multiple: bool,

    /// Walk directories recursively (implies -m).
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Worker threads for multiple inputs (0 = one per core).
    #[arg(short = 'T', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Codec strategy: direct or probing.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Increase verbosity (repeatable).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable).
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Input file, then optional output file; `-` means stdin / stdout.
    pub files: Vec<String>,
}

/// Where the CLI reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One input; `output == None` means "derive from the input name".
    Single { input: String, output: Option<String> },
    /// Several inputs, each with a derived output name.
    Multiple(Vec<PathBuf>),
}

/// Fully resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: OpMode,
    pub target: Target,
    pub opts: FileOptions,
    pub nb_workers: usize,
    pub strategy: Strategy,
    pub display_level: u32,
}

fn sentinel_in(name: &str) -> String {
    if name == "-" {
        STDIN_MARK.to_owned()
    } else {
        name.to_owned()
    }
}

fn sentinel_out(name: &str) -> String {
    if name == "-" {
        STDOUT_MARK.to_owned()
    } else {
        name.to_owned()
    }
}

impl Args {
    /// Parse `std::env::args()`.
    pub fn parse_env() -> Self {
        Args::parse()
    }

    fn mode(&self) -> OpMode {
        if self.test {
            OpMode::Test
        } else if self.decompress {
            OpMode::Decompress
        } else if self.compress {
            OpMode::Compress
        } else {
            OpMode::Auto
        }
    }

    /// Resolve into [`Settings`].
    ///
    /// Environment defaults (`LZFSEKIT_PATH`, `LZFSEKIT_NBWORKERS`) apply
    /// when the matching flag is absent. With `-r`, directories are expanded
    /// here, keeping `.lzfse` files when decompressing or testing and the
    /// others when compressing.
    pub fn resolve(self) -> anyhow::Result<Settings> {
        let mode = self.mode();
        let display_level = (DEFAULT_DISPLAY_LEVEL + u32::from(self.verbose))
            .saturating_sub(u32::from(self.quiet));
        let nb_workers = self.threads.unwrap_or_else(init_nb_workers).min(NB_WORKERS_MAX);
        let strategy = self.strategy.unwrap_or_else(init_strategy);
        let opts = FileOptions { overwrite: self.force, remove_src: self.rm };

        let target = if self.multiple || self.recursive {
            if self.stdout {
                bail!("-c cannot be combined with multiple inputs");
            }
            if self.files.is_empty() {
                bail!("no input files");
            }
            if self.files.iter().any(|f| f == "-") {
                bail!("stdin cannot be one of multiple inputs");
            }
            let paths: Vec<PathBuf> = self.files.iter().map(PathBuf::from).collect();
            let paths = if self.recursive {
                let select = match mode {
                    OpMode::Decompress | OpMode::Test => Select::Compressed,
                    OpMode::Compress => Select::Uncompressed,
                    OpMode::Auto => Select::All,
                };
                let refs: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
                create_file_list(&refs, select)?
            } else {
                paths
            };
            Target::Multiple(paths)
        } else {
            if self.files.len() > 2 {
                bail!("too many file arguments; use -m for multiple inputs");
            }
            let input = sentinel_in(self.files.first().map(String::as_str).unwrap_or("-"));
            let output = match self.files.get(1) {
                Some(out) => Some(sentinel_out(out)),
                None if self.stdout || input == STDIN_MARK => Some(STDOUT_MARK.to_owned()),
                None => None,
            };
            Target::Single { input, output }
        };

        Ok(Settings { mode, target, opts, nb_workers, strategy, display_level })
    }
}
