//! devdetect browser and os commands

use super::{write_json, write_line};
use clap::Args;
use devdetect::{
    env::UserAgent,
    error::{BoxError, ErrorContext as _},
    ua::{browser::classify_browser, os::classify_os},
};

#[derive(Debug, Args)]
/// classify the browser of a user agent
pub struct CliCommandBrowser {
    /// the user agent to classify
    ua: String,

    #[arg(long, short = 'j')]
    /// print the result as json instead of a label
    json: bool,
}

/// run the devdetect browser command
pub fn run_browser(cfg: CliCommandBrowser) -> Result<(), BoxError> {
    let info = classify_browser(&UserAgent::new(cfg.ua));
    if cfg.json {
        let value = serde_json::to_value(&info).context("serialize browser info")?;
        write_json(&value, false)
    } else {
        write_line(info)
    }
}

#[derive(Debug, Args)]
/// classify the operating system of a user agent
pub struct CliCommandOs {
    /// the user agent to classify
    ua: String,

    #[arg(long, short = 'j')]
    /// print the result as json instead of a label
    json: bool,
}

/// run the devdetect os command
pub async fn run_os(cfg: CliCommandOs) -> Result<(), BoxError> {
    let info = classify_os(&UserAgent::new(cfg.ua)).await;
    if cfg.json {
        let value = serde_json::to_value(&info).context("serialize os info")?;
        write_json(&value, false)
    } else {
        write_line(info)
    }
}
