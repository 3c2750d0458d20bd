//! Command-line interface.

pub mod completions;
pub mod mask;
pub mod output;
pub mod status;
pub mod unmask;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants::STORE_FILE;
use crate::error::Result;

/// Veil - Mask secrets in project config files before they reach git.
#[derive(Parser)]
#[command(
    name = "veil",
    about = "Mask secrets in project config files before they reach git",
    version,
    arg_required_else_help = true,
    after_help = "Keep .secrets.json out of version control."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Project root that target files are relative to
    #[arg(short = 'C', long, global = true, env = "VEIL_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Secret store file (relative to the project root)
    #[arg(long, global = true, env = "VEIL_STORE", default_value = STORE_FILE)]
    pub store: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Build the runtime config from the parsed flags.
    pub fn config(&self) -> Result<Config> {
        Ok(Config::builtin(&self.root)?.with_store(&self.store))
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Replace secrets with ****** and record the originals
    Mask,

    /// Restore recorded secrets in place of ******
    Unmask,

    /// Show masked and stored counts per file
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Lowercase the command name in raw arguments, so `veil MASK` runs `mask`.
///
/// Only the first positional argument is considered, and only when it names
/// a command once lowercased. Values of options such as `--store` are left
/// alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let cmd = Cli::command();
    let commands: Vec<&str> = cmd.get_subcommands().map(|c| c.get_name()).collect();
    let valued: Vec<String> = cmd
        .get_arguments()
        .filter(|a| a.get_action().takes_values())
        .flat_map(|a| {
            let long = a.get_long().map(|l| format!("--{}", l));
            let short = a.get_short().map(|s| format!("-{}", s));
            long.into_iter().chain(short)
        })
        .collect();

    let mut args: Vec<OsString> = args.into_iter().collect();
    // argv[0], then any option value.
    let mut skip = true;
    for arg in args.iter_mut() {
        if std::mem::take(&mut skip) {
            continue;
        }
        let Some(text) = arg.to_str() else {
            break;
        };
        if valued.iter().any(|v| v == text) {
            skip = true;
            continue;
        }
        if text.starts_with('-') {
            continue;
        }
        let lower = text.to_lowercase();
        if commands.contains(&lower.as_str()) {
            *arg = OsString::from(lower);
        }
        break;
    }
    args
}

/// Execute a command.
pub fn execute(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Mask => mask::execute(config),
        Command::Unmask => unmask::execute(config),
        Command::Status => status::execute(config),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// `1 secret`, `3 secrets`.
fn secrets(count: usize) -> String {
    format!("{} secret{}", count, if count == 1 { "" } else { "s" })
}
