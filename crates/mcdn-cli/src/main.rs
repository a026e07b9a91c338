use clap::Parser;
use mcdn_core::logging::{self, LogTarget};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Log to the state file; stderr if that is not writable.
    if let Err(err) = logging::init_logging(LogTarget::StateFile, cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("mcdn error: {:#}", err);
        std::process::exit(1);
    }
}
