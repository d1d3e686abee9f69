//! Rendering of per-input results.

use std::io::{self, Write};

use serde_json::json;
use vincheck_validator::foundation::ValidationError;
use vincheck_validator::{Vin, VinError};

use crate::config::OutputFormat;

/// Writes the verdict for one `validate` input.
pub fn validation(
    out: &mut dyn Write,
    format: OutputFormat,
    input: &str,
    result: &Result<Vin, VinError>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match result {
            Ok(_) => writeln!(out, "{input}: valid"),
            Err(err) => writeln!(out, "{input}: invalid ({err})"),
        },
        OutputFormat::Json => {
            let value = match result {
                Ok(vin) => json!({ "input": input, "valid": true, "vin": vin.as_str() }),
                Err(err) => json!({
                    "input": input,
                    "valid": false,
                    "error": ValidationError::from(*err).to_json_value(),
                }),
            };
            json_line(out, &value)
        }
    }
}

/// Writes the computed check digit (or completed VIN) for one `check-digit` input.
pub fn check_digit(
    out: &mut dyn Write,
    format: OutputFormat,
    input: &str,
    result: &Result<Vin, VinError>,
    apply: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => match result {
            Ok(vin) if apply => writeln!(out, "{input}: {vin}"),
            Ok(vin) => writeln!(out, "{input}: {}", vin.check_digit()),
            Err(err) => writeln!(out, "{input}: error ({err})"),
        },
        OutputFormat::Json => {
            let value = match result {
                Ok(vin) => json!({
                    "input": input,
                    "check_digit": vin.check_digit().to_string(),
                    "vin": vin.as_str(),
                }),
                Err(err) => json!({
                    "input": input,
                    "error": ValidationError::from(*err).to_json_value(),
                }),
            };
            json_line(out, &value)
        }
    }
}

fn json_line(out: &mut dyn Write, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
