//! CLI argument parsing using clap.
//!
//! Defines the command-line interface of the mail-pipeline entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// list-hook: mailing list to chat webhook notifier
///
/// Reads one message from stdin and posts a notification for it to the
/// webhook configured for the list. Delivery failures are logged and never
/// fail the command.
#[derive(Debug, Parser)]
#[command(name = "list-hook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Identifier of the list the message on stdin was posted to
    #[arg(long, short)]
    pub list: Option<String>,

    /// Path to configuration file
    #[arg(long, short, global = true, default_value = defaults::CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for list-hook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Print the webhook URL a list's messages are sent to
    Route {
        /// List identifier
        list: String,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error
    /// instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns [`clap::Error`] if the arguments are invalid.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
