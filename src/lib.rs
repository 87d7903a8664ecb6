pub mod app;
pub mod cli;
pub mod entry;
pub mod error;
pub mod listing;
pub mod logging;
pub mod render;
pub mod size;
pub mod users;

pub use app::{ListOptions, list};
pub use cli::{ArgsError, Cli, ColorChoice};
pub use entry::{Entry, Kind, LongEntry};
pub use error::{LsError, Result};
pub use render::Palette;
pub use users::{NameResolver, StaticNames, SystemNames};
