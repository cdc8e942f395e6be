//! devdetect country and language commands

use super::write_line;
use clap::Args;
use devdetect::{
    error::BoxError,
    locale::{country_name, language_name},
};

#[derive(Debug, Args)]
/// look up the name of an ISO 3166-1 alpha-2 country code
pub struct CliCommandCountry {
    /// two letter country code, e.g. `BE`
    code: String,
}

/// run the devdetect country command
pub fn run_country(cfg: CliCommandCountry) -> Result<(), BoxError> {
    let name = country_name(&cfg.code)?;
    write_line(name)
}

#[derive(Debug, Args)]
/// look up the name of an ISO 639-1 language code
pub struct CliCommandLanguage {
    /// two letter language code, e.g. `nl`
    code: String,
}

/// run the devdetect language command
pub fn run_language(cfg: CliCommandLanguage) -> Result<(), BoxError> {
    write_line(language_name(&cfg.code))
}
