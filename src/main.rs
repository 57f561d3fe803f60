// src/main.rs

use cbt::errors::default_error_handler;
use cbt::help::show_usage;
use cbt::{build_cli, run, DefaultReporter, OutputFormat};
use clap::error::ErrorKind;
use log::debug;

/// Initialises logging; `RUST_LOG` takes precedence over the verbosity flag.
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                init_logger(false);
                debug!("Argument parsing failed: {}", e);
                show_usage();
                return;
            }
        },
    };

    init_logger(matches.get_flag("verbose"));

    let format = if matches.get_flag("no_color") {
        OutputFormat::Plain
    } else {
        OutputFormat::Pretty
    };
    let reporter = DefaultReporter::with_format(format);

    if let Err(err) = run(&matches, &reporter) {
        default_error_handler(err);
    }
}
