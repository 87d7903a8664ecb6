use crate::cli::Cli;
use crate::entry::LongEntry;
use crate::error::Result;
use crate::listing::{read_entries, sort_entries};
use crate::render::{self, Palette};
use crate::users::NameResolver;
use std::path::{Path, PathBuf};

/// Everything needed to produce one listing.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub path: PathBuf,
    pub all: bool,
    pub long: bool,
    pub width: usize,
    pub palette: Palette,
}

impl ListOptions {
    pub fn from_cli(cli: &Cli, cwd: &Path, width: usize, palette: Palette) -> Self {
        Self {
            path: cli.target(cwd),
            all: cli.all,
            long: cli.long,
            width,
            palette,
        }
    }
}

/// Reads, sorts and renders the directory described by `options`.
pub fn list<R: NameResolver + ?Sized>(options: &ListOptions, names: &mut R) -> Result<String> {
    tracing::debug!(
        path = %options.path.display(),
        all = options.all,
        long = options.long,
        width = options.width,
        color = options.palette.is_enabled(),
        "listing"
    );

    let mut entries = read_entries(&options.path, options.all)?;
    sort_entries(&mut entries);

    if !options.long {
        return Ok(render::short(&entries, options.width, &options.palette));
    }

    let long_entries = entries
        .into_iter()
        .map(|entry| LongEntry::resolve(entry, names))
        .collect::<Result<Vec<_>>>()?;

    Ok(render::long(&long_entries, &options.palette))
}
