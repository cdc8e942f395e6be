//! devdetect report command

use super::{read_json, write_json};
use clap::Args;
use devdetect::{
    env::{EnvironmentSnapshot, UserAgent},
    error::{BoxError, ErrorContext as _, OpaqueError},
    report::ClientReport,
    telemetry::tracing,
    ua::device::DeviceConfig,
};
use std::path::PathBuf;

#[derive(Debug, Args)]
/// collect a full report (browser, os, device, probes and locale) as json
pub struct CliCommandReport {
    #[arg(long, short = 'u')]
    /// the user agent to classify
    ///
    /// Overrides the user agent of the snapshot if both are given.
    ua: Option<String>,

    #[arg(long, short = 's')]
    /// path to a json environment snapshot
    ///
    /// Captured navigator data, e.g. `{"userAgent": "...", "maxTouchPoints": 5, "languages": ["en-US"]}`.
    snapshot: Option<PathBuf>,

    #[arg(long, short = 'c')]
    /// path to a json device config
    ///
    /// e.g. `{"mobile_tokens": ["mobi", "tablet"], "gate_resolution_lookup": false}`
    config: Option<PathBuf>,

    #[arg(long, short = 'p')]
    /// pretty print the json output
    pretty: bool,
}

/// run the devdetect report command
pub async fn run(cfg: CliCommandReport) -> Result<(), BoxError> {
    let device_cfg = match cfg.config.as_deref() {
        Some(path) => read_json::<DeviceConfig>(path)?,
        None => DeviceConfig::default(),
    };

    let report = match (cfg.snapshot.as_deref(), cfg.ua) {
        (Some(path), ua) => {
            let mut snapshot: EnvironmentSnapshot = read_json(path)?;
            if let Some(ua) = ua {
                tracing::debug!("override snapshot user agent with: {ua}");
                snapshot.user_agent = ua;
            }
            ClientReport::collect(&snapshot, &device_cfg).await
        }
        (None, Some(ua)) => ClientReport::collect(&UserAgent::new(ua), &device_cfg).await,
        (None, None) => {
            return Err(
                OpaqueError::from_display("either --ua or --snapshot is required").into_boxed(),
            );
        }
    };

    let value = serde_json::to_value(&report).context("serialize client report")?;
    write_json(&value, cfg.pretty)
}
