//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

/// Validate vehicle identification numbers (ISO 3779 check digit).
#[derive(Parser, Debug)]
#[command(name = "vincheck", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file [default: ./vincheck.toml when present]
    #[arg(long, global = true, env = "VINCHECK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `vincheck=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate VINs; exits with 1 if any is invalid
    Validate(ValidateArgs),
    /// Compute the check digit (9th character) of each VIN
    CheckDigit(CheckDigitArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// VINs to validate; omit or pass `-` to read one per line from stdin
    #[arg(value_name = "VIN")]
    pub vins: Vec<String>,

    /// Print nothing; report through the exit code only
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// VINs with any character in the check-digit slot; omit or pass `-`
    /// to read one per line from stdin
    #[arg(value_name = "VIN")]
    pub vins: Vec<String>,

    /// Print the VIN with the computed check digit instead of the digit alone
    #[arg(long)]
    pub apply: bool,
}
