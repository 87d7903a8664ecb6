use crate::error::{LsError, Result};
use crate::size::human_size;
use crate::users::NameResolver;
use std::cmp::Ordering;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::PathBuf;

const EXECUTABLE_BITS: u32 = 0o111;

/// What an entry is, ordered the way listings group them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    Directory,
    Symlink,
    File,
    /// Sockets, FIFOs and device nodes.
    Other,
}

impl From<fs::FileType> for Kind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Kind::Directory
        } else if file_type.is_symlink() {
            Kind::Symlink
        } else if file_type.is_file() {
            Kind::File
        } else {
            Kind::Other
        }
    }
}

/// A single directory entry with the metadata the renderers need.
///
/// Symlinks are never followed: `kind`, `mode` and `size` describe the
/// link itself.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub kind: Kind,
    pub path: PathBuf,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
}

impl Entry {
    /// Builds an entry that is not backed by the filesystem.
    #[doc(hidden)]
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            kind,
            mode: 0o644,
            uid: 0,
            gid: 0,
            size: 0,
        }
    }

    #[doc(hidden)]
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    #[doc(hidden)]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    #[doc(hidden)]
    pub fn with_owner(mut self, uid: u32, gid: u32) -> Self {
        self.uid = uid;
        self.gid = gid;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn is_executable(&self) -> bool {
        self.kind == Kind::File && self.mode & EXECUTABLE_BITS != 0
    }

    /// Terminal columns taken by the rendered name, including the `/`
    /// suffix on directories.
    pub fn display_width(&self) -> usize {
        let width = console::measure_text_width(&self.name);
        if self.kind == Kind::Directory {
            width + 1
        } else {
            width
        }
    }
}

impl TryFrom<fs::DirEntry> for Entry {
    type Error = LsError;

    fn try_from(dir_entry: fs::DirEntry) -> Result<Self> {
        let name = dir_entry.file_name().into_string()?;
        let kind = Kind::from(dir_entry.file_type()?);
        let metadata = dir_entry.metadata()?;

        Ok(Self {
            name,
            kind,
            path: dir_entry.path(),
            mode: metadata.mode(),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.size(),
        })
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name == other.name
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// An entry with the extra columns shown by `-l`.
#[derive(Debug, Clone)]
pub struct LongEntry {
    pub entry: Entry,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub link_target: Option<String>,
}

impl LongEntry {
    pub fn resolve<R: NameResolver + ?Sized>(entry: Entry, names: &mut R) -> Result<Self> {
        let owner = names.user_name(entry.uid);
        let group = names.group_name(entry.gid);
        let size = human_size(entry.size);

        let link_target = if entry.kind == Kind::Symlink {
            let target = fs::read_link(&entry.path)?;
            Some(target.to_string_lossy().into_owned())
        } else {
            None
        };

        Ok(Self {
            entry,
            owner,
            group,
            size,
            link_target,
        })
    }
}
