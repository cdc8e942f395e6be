//! devdetect cli commands

pub mod classify;
pub mod lookup;
pub mod report;

use devdetect::error::{BoxError, ErrorContext as _};
use serde_json::Value;
use std::{fmt::Display, io::Write as _, path::Path};

/// Read and deserialize a json file.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, BoxError> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read json file: {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("parse json file: {}", path.display()))?;
    Ok(value)
}

fn write_json(value: &Value, pretty: bool) -> Result<(), BoxError> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize json output")?;
    write_line(output)
}

fn write_line(line: impl Display) -> Result<(), BoxError> {
    writeln!(std::io::stdout().lock(), "{line}").context("write to stdout")?;
    Ok(())
}
