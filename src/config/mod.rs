//! Configuration layer for list-hook.
//!
//! This module provides:
//! - Sectioned key/value sources ([`ConfigSource`], [`TomlSource`], [`MapSource`])
//! - The list routing table ([`RouteTable`])
//! - Process-wide notifier settings ([`Settings`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # File layout
//!
//! ```toml
//! [global]
//! url = "https://chat.example/hooks/default"
//! message_format = "[{list_name}] {from}: {subject}"
//! timeout = 10
//!
//! [list.announce]
//! url = "https://chat.example/hooks/announce"
//! ```
//!
//! # Leniency
//!
//! Operator mistakes never stop the host. A missing key, or a key holding
//! a value of the wrong type, silently takes its default. Only a file that
//! cannot be read or parsed at all is a [`ConfigError`], and callers are
//! expected to log it and carry on with [`Settings::default`].

mod cli;
pub mod defaults;
mod error;
mod routes;
mod settings;
mod source;
mod template;

#[cfg(test)]
mod routes_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use routes::{GLOBAL_SECTION, LIST_SECTION_PREFIX, RouteTable, key};
pub use settings::Settings;
pub use source::{ConfigSource, MapSource, TomlSource};
pub use template::{default_config_template, write_default_config};
