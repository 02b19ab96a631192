use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod beatmap;
mod cli;
mod config;
mod error;
mod export;
mod library;
mod progress;
mod runtime;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match runtime::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("osu-audio-extract: {e}");
            ExitCode::FAILURE
        }
    }
}
