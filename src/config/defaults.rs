//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use std::time::Duration;

/// Destination used when neither a list route nor a global URL is set.
/// Empty means "send nothing".
pub const URL: &str = "";

/// Built-in notification template.
pub const MESSAGE_FORMAT: &str = "[{list_name}]\nFrom: {from}\nSubject: {subject}\n{text}\n";

/// Subject rendered when the message has no `Subject` header.
pub const SUBJECT: &str = "- Another message -";

/// Default webhook request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default configuration file path.
pub const CONFIG_FILE: &str = "list-hook.toml";

/// Default webhook request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
