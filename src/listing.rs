use crate::entry::Entry;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Reads the entries of `path`, dropping hidden ones unless `all` is set.
///
/// The returned entries are in directory order; see [`sort_entries`].
/// Any failure while reading aborts the whole listing.
pub fn read_entries(path: &Path, all: bool) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for dir_entry in fs::read_dir(path)? {
        let entry = Entry::try_from(dir_entry?)?;
        if !all && entry.is_hidden() {
            skipped += 1;
            continue;
        }
        entries.push(entry);
    }

    tracing::info!(
        path = %path.display(),
        listed = entries.len(),
        hidden_skipped = skipped,
        "read directory"
    );

    Ok(entries)
}

pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort();
}
