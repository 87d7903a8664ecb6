use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ls::render::{self, Palette};
use ls::{ArgsError, Cli, ListOptions, LsError, SystemNames, logging};

fn main() -> ExitCode {
    let cli = match Cli::parse_from_args(env::args_os()) {
        Ok(cli) => cli,
        Err(ArgsError::Clap(err)) => err.exit(),
        Err(ArgsError::Ls(err)) => return fail(&err),
    };

    if let Err(err) = logging::init(cli.log_level()) {
        eprintln!("warning: {err:#}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn run(cli: &Cli) -> Result<(), LsError> {
    let cwd = env::current_dir()?;
    let palette = Palette::new(cli.color.enabled(console::colors_enabled()));
    let options = ListOptions::from_cli(cli, &cwd, render::terminal_width(), palette);

    let output = ls::list(&options, &mut SystemNames::new())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn fail(err: &LsError) -> ExitCode {
    tracing::debug!(error = ?err, "exiting with error");
    eprintln!(
        "{}",
        render::error_line(err, console::colors_enabled_stderr())
    );
    ExitCode::from(err.exit_status())
}
