use crate::error::LsError;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "ls")]
#[command(version, about = "List directory contents", long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Include entries whose names begin with a dot
    #[arg(short, long)]
    pub all: bool,

    /// Show owner, group and size for each entry
    #[arg(short, long)]
    pub long: bool,

    /// When to style names
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log progress to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log debugging details to stderr
    #[arg(long)]
    pub debug: bool,

    /// Directory to list, relative to the current directory
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolves `Auto` against whether `stream_styled` (the terminal and
    /// environment check for the stream being written) allows styling.
    pub fn enabled(self, stream_styled: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stream_styled,
        }
    }
}

/// Why the command line was rejected.
#[derive(Debug)]
pub enum ArgsError {
    /// An unrecognised `-x` / `--xyz` flag.
    Ls(LsError),
    /// Help, version, or any other usage problem clap reports itself.
    Clap(clap::Error),
}

impl Cli {
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(classify)
    }

    /// The directory to list, resolved against `cwd`.
    pub fn target(&self, cwd: &Path) -> PathBuf {
        match &self.path {
            Some(path) => cwd.join(path),
            None => cwd.to_path_buf(),
        }
    }

    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

fn classify(err: clap::Error) -> ArgsError {
    if err.kind() != ErrorKind::UnknownArgument {
        return ArgsError::Clap(err);
    }

    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) if arg.starts_with('-') => {
            let flag = arg.trim_start_matches('-');
            let flag = flag.split('=').next().unwrap_or(flag);
            ArgsError::Ls(LsError::UnknownFlag(flag.to_string()))
        }
        _ => ArgsError::Clap(err),
    }
}
