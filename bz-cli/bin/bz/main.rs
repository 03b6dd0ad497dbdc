//! bzip2 single-file compressor
//!
//! `bz a <input> <output>` compresses, `bz e <input> <output>` extracts.

use std::process;

use clap::error::ErrorKind;
use log::LevelFilter;

mod opts;

use opts::BzOpts;

use bz_cli::{format_failure, parse_invocation, run, usage, Error, EXIT_OK, EXIT_USAGE};
use bz_core::progress::Gauge;
use bz_core::signal::{install_interrupt_handler, CancelToken};

const PROGRAM_NAME: &str = "bz";

fn main() {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        builder.filter(None, LevelFilter::Warn);
    }
    builder.init();

    let args = match BzOpts::try_parse() {
        Ok(opts) => opts.args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            log::debug!("{err}");
            print!("{}", usage(PROGRAM_NAME));
            process::exit(EXIT_USAGE);
        }
    };

    let config = match parse_invocation(&args) {
        Ok(config) => config,
        Err(Error::Usage) => {
            print!("{}", usage(PROGRAM_NAME));
            process::exit(EXIT_USAGE);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(EXIT_USAGE);
        }
    };

    if let Err(err) = install_interrupt_handler() {
        log::warn!("cannot install interrupt handler: {err}");
    }

    let mut gauge = Gauge::stdout();
    let result = run(&config, &mut gauge, CancelToken::global());
    gauge.finish();

    match result {
        Ok(summary) => {
            log::info!(
                "{} -> {} bytes ({:.1}% saved)",
                summary.bytes_read,
                summary.bytes_written,
                summary.space_saved_percent()
            );
            println!("{}", config.action.done_message());
        }
        // The operation has already reported its failure; the exit status stays 0.
        Err(err) => eprintln!("{}", format_failure(config.action, &err)),
    }

    process::exit(EXIT_OK);
}
