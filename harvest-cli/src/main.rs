//! Entry point for the `harvest` command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env};
use harvest_cli::CliError;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

#[expect(
    clippy::print_stderr,
    reason = "fatal errors are reported on stderr before exiting"
)]
fn main() {
    init_logging();
    match harvest_cli::run() {
        Ok(()) => {}
        // Lets clap print help and version output with its own exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("harvest: {err}");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
