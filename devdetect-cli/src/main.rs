//! entrypoint for devdetect-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use devdetect::telemetry::tracing::level_filters::LevelFilter;

pub mod cmd;
use self::cmd::{classify, lookup, report};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "devdetect")]
#[command(bin_name = "devdetect")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Report(report::CliCommandReport),
    Browser(classify::CliCommandBrowser),
    Os(classify::CliCommandOs),
    Country(lookup::CliCommandCountry),
    Language(lookup::CliCommandLanguage),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    #[expect(clippy::exit)]
    if let Err(err) = trace::init_tracing(LevelFilter::WARN) {
        eprintln!("🚩 failed to init tracing: {err}");
        std::process::exit(1);
    }

    #[expect(clippy::exit)]
    if let Err(err) = match cli.cmds {
        CliCommands::Report(cfg) => report::run(cfg).await,
        CliCommands::Browser(cfg) => classify::run_browser(cfg),
        CliCommands::Os(cfg) => classify::run_os(cfg).await,
        CliCommands::Country(cfg) => lookup::run_country(cfg),
        CliCommands::Language(cfg) => lookup::run_language(cfg),
    } {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}
