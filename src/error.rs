use std::ffi::OsString;
use std::io;
use thiserror::Error;

/// Everything that can stop a listing.
#[derive(Error, Debug)]
pub enum LsError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("File name includes invalid Unicode data")]
    StringConversion,

    #[error("Unknown flag \"{0}\"")]
    UnknownFlag(String),
}

pub type Result<T> = std::result::Result<T, LsError>;

impl From<OsString> for LsError {
    fn from(_: OsString) -> Self {
        Self::StringConversion
    }
}

impl LsError {
    /// Process exit code for this error. I/O failures exit with the OS errno.
    pub fn code(&self) -> i32 {
        match self {
            LsError::Io(err) => err.raw_os_error().unwrap_or(1),
            _ => 1,
        }
    }

    /// `code()` narrowed to a process exit status. Codes that do not fit in
    /// a byte report 1 instead of wrapping to an unrelated status.
    pub fn exit_status(&self) -> u8 {
        u8::try_from(self.code()).unwrap_or(1)
    }

    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, LsError::Io(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}
