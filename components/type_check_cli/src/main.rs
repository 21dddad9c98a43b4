//! Type-check CLI
//!
//! Entry point for the `type-check` binary. Parses CLI arguments, installs
//! the log subscriber and delegates to the Runner.

use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, EnvFilter};
use type_check_cli::{Cli, Runner};

/// Logs go to stderr; stdout carries command output only.
/// `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match Runner::new().execute(&cli.command) {
        Ok(execution) => {
            print!("{}", execution.output);
            std::process::exit(execution.exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
