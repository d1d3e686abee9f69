//! Subcommand handlers.
//!
//! Inputs are handled one at a time: each stdin line is validated and its
//! result written before the next line is read. Lines that are not valid
//! UTF-8 are decoded lossily; the replacement characters are never legal VIN
//! characters, so such a line is reported as an invalid input.

use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, trace};
use vincheck_validator::{TRIMMED_PADDING, Vin};

use crate::cli::{CheckDigitArgs, ValidateArgs};
use crate::config::OutputFormat;
use crate::report;

/// Outcome of a command that completed without operational errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every input was accepted.
    Success,
    /// At least one input was rejected.
    Invalid,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Invalid => ExitCode::from(1),
        }
    }
}

/// Standard streams, injectable for tests.
pub struct Io<'a> {
    /// Source of VINs when none (or `-`) is given on the command line.
    pub stdin: &'a mut dyn BufRead,
    /// Destination of the results.
    pub stdout: &'a mut dyn Write,
}

/// `vincheck validate`
pub fn validate(args: &ValidateArgs, format: OutputFormat, io: Io<'_>) -> anyhow::Result<Status> {
    let Io { stdin, stdout } = io;
    let mut status = Status::Success;

    for_each_input(&args.vins, stdin, |input| {
        let result = Vin::parse(input);
        match &result {
            Ok(vin) => debug!(input = %input, vin = %vin, "accepted"),
            Err(err) => {
                debug!(input = %input, code = err.code(), error = %err, "rejected");
                status = Status::Invalid;
            }
        }
        if !args.quiet {
            report::validation(stdout, format, input, &result)
                .context("failed to write to stdout")?;
        }
        Ok(())
    })?;

    stdout.flush().context("failed to write to stdout")?;
    Ok(status)
}

/// `vincheck check-digit`
pub fn check_digit(
    args: &CheckDigitArgs,
    format: OutputFormat,
    io: Io<'_>,
) -> anyhow::Result<Status> {
    let Io { stdin, stdout } = io;
    let mut status = Status::Success;

    for_each_input(&args.vins, stdin, |input| {
        let result = Vin::with_check_digit(input);
        match &result {
            Ok(vin) => debug!(input = %input, check_digit = %vin.check_digit(), "computed"),
            Err(err) => {
                debug!(input = %input, code = err.code(), error = %err, "rejected");
                status = Status::Invalid;
            }
        }
        report::check_digit(stdout, format, input, &result, args.apply)
            .context("failed to write to stdout")
    })?;

    stdout.flush().context("failed to write to stdout")?;
    Ok(status)
}

/// Feeds every input to `handle` in order: positional arguments as given,
/// stdin lines in place of the first `-`, or stdin alone when there are no
/// arguments.
fn for_each_input(
    args: &[String],
    stdin: &mut dyn BufRead,
    mut handle: impl FnMut(&str) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    if args.is_empty() {
        return for_each_line(stdin, &mut handle);
    }

    let mut stdin_read = false;
    for arg in args {
        if arg == "-" {
            if !stdin_read {
                for_each_line(stdin, &mut handle)?;
                stdin_read = true;
            }
        } else {
            handle(arg.as_str())?;
        }
    }
    Ok(())
}

/// Streams non-blank stdin lines to `handle`.
fn for_each_line(
    stdin: &mut dyn BufRead,
    handle: &mut dyn FnMut(&str) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let mut line_number = 0_usize;
    let mut count = 0_usize;

    loop {
        buf.clear();
        let read = stdin
            .read_until(b'\n', &mut buf)
            .context("failed to read stdin")?;
        if read == 0 {
            break;
        }

        line_number += 1;

        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            debug!(line = line_number, "stdin line is not valid UTF-8");
        }
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim_matches(TRIMMED_PADDING).is_empty() {
            continue;
        }

        count += 1;
        handle(line)?;
    }

    trace!(count, "read inputs from stdin");
    Ok(())
}
