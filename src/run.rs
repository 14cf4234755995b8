//! Application execution logic.
//!
//! Loads settings, reads one message and hands it to the webhook archiver.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use list_hook::archiver::{Archiver, MailingList, WebhookArchiver};
use list_hook::config::{ConfigSource, Settings, TomlSource};
use list_hook::message::RawMessage;
use list_hook::webhook::{DeliveryOutcome, HttpError, Notifier, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Failures outside the delivery attempt itself.
///
/// Delivery problems are [`DeliveryOutcome`]s and never become a `RunError`.
#[derive(Debug, Error)]
pub enum RunError {
    /// The message could not be read from the input stream.
    #[error("Failed to read message: {0}")]
    ReadMessage(#[source] std::io::Error),

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),
}

/// Loads settings from `path`, falling back to defaults.
///
/// A file that cannot be read or parsed is logged and treated as empty, so
/// no notification is sent but the caller carries on.
pub fn load_settings(path: &Path) -> Settings {
    match TomlSource::load(path) {
        Ok(source) => settings_from(&source),
        Err(e) => {
            tracing::error!("{e}; continuing with no webhook configured");
            Settings::default()
        }
    }
}

fn settings_from(source: &impl ConfigSource) -> Settings {
    let settings = Settings::load(source);
    tracing::debug!("{settings}");
    settings
}

/// Reads one RFC 5322 message from `input`.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// Returns [`RunError::ReadMessage`] if reading fails.
pub fn read_message(mut input: impl Read) -> Result<RawMessage, RunError> {
    let mut raw = Vec::new();
    input
        .read_to_end(&mut raw)
        .map_err(RunError::ReadMessage)?;

    Ok(RawMessage::parse(&String::from_utf8_lossy(&raw)))
}

/// Sends the notification for `message` posted to `list`.
///
/// # Errors
///
/// Returns [`RunError::Client`] if the HTTP client cannot be built.
pub async fn execute(
    settings: Settings,
    list: &str,
    message: &RawMessage,
) -> Result<DeliveryOutcome, RunError> {
    let client = ReqwestClient::with_timeout(settings.timeout).map_err(RunError::Client)?;
    let archiver = WebhookArchiver::new(Notifier::new(client, settings.routes));

    let outcome = archiver
        .archive_message(&MailingList::new(list), message)
        .await;
    tracing::debug!(list, outcome = outcome.label(), "Archiver finished");

    Ok(outcome)
}

/// Describes where messages for `list` go.
#[must_use]
pub fn describe_route(settings: &Settings, list: &str) -> String {
    let routes = &settings.routes;
    let url = routes.resolve(list);
    let origin = if routes.has_route(list) {
        "list route"
    } else {
        "global default"
    };

    if url.is_empty() {
        format!("{list}: no destination ({origin})")
    } else {
        format!("{list}: {url} ({origin})")
    }
}
