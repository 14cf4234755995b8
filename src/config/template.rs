//! Commented configuration template for the `init` command.

use std::path::Path;

use super::ConfigError;

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# list-hook configuration file

[global]
# Webhook URL for lists without their own [list.<name>] section.
# Leave empty to send nothing for those lists.
url = ""

# Notification text. Placeholders: {list_name}, {from}, {subject}, {text}
# Use {{ and }} for literal braces.
# message_format = "[{list_name}]\nFrom: {from}\nSubject: {subject}\n{text}\n"

# Seconds to wait for the webhook before giving up (default: 10)
# timeout = 10

# Per-list destinations. Quote list names that contain dots.
# [list.announce]
# url = "https://chat.example/hooks/announce"

# An empty URL disables notifications for that list, even if
# global.url is set.
# [list."dev.team"]
# url = ""
"#
    .to_string()
}

/// Writes the commented configuration template to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
