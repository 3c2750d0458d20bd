//! Veil - Mask secrets in project config files before they reach git.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use veil::cli::output;
use veil::cli::{execute, normalize_args, Cli};
use veil::core::constants::LOG_ENV;

fn main() {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            let name = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => String::new(),
            };
            output::error(&format!("unknown command: {}", name));
            output::hint("usage: veil [mask|unmask|status]");
            std::process::exit(2);
        }
        Err(e) => e.exit(),
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("veil=debug")
        } else {
            EnvFilter::new("veil=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let result = cli
        .config()
        .and_then(|config| execute(cli.command, &config));

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
