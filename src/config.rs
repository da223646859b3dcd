//! Command-line configuration and logging setup.

use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Environment variable holding the log filter, e.g. `LABYRINTH_LOG=debug`.
pub const LOG_ENV: &str = "LABYRINTH_LOG";
/// Environment variable controlling colored log output (`auto`, `always` or `never`).
pub const LOG_STYLE_ENV: &str = "LABYRINTH_LOG_STYLE";

/// Runtime configuration parsed from the command line.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Path to the labyrinth definition file.
    pub path: PathBuf,
}

/// Installs the logger when [`LOG_ENV`] is set.
///
/// Logging stays disabled otherwise. Records go to stderr, so redirect it to a file to keep the
/// terminal viewer readable.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been installed.
pub fn init_logging() -> Result<(), SetLoggerError> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }

    Builder::from_env(Env::new().filter(LOG_ENV).write_style(LOG_STYLE_ENV)).try_init()
}
