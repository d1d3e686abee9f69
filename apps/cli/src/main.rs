//! `vincheck`: validate VINs from the command line.
//!
//! Exit codes: `0` when every input is valid, `1` when any input is invalid,
//! `2` on operational errors (bad configuration, unreadable input).

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod config;
mod logging;
mod report;

use cli::{Cli, Command};
use commands::{Io, Status};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Status> {
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.output, cli.log_level);
    logging::init(&config.log)?;
    debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let io = Io {
        stdin: &mut stdin.lock(),
        stdout: &mut stdout.lock(),
    };

    match &cli.command {
        Command::Validate(args) => commands::validate(args, config.output, io),
        Command::CheckDigit(args) => commands::check_digit(args, config.output, io),
    }
}
