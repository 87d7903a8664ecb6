use anyhow::{Result, anyhow};
use tracing::Level;

/// Installs the global `fmt` subscriber. Diagnostics go to stderr so they
/// never interleave with the listing on stdout.
pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(console::colors_enabled_stderr())
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
