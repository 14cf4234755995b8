//! Notification text rendering.
//!
//! Templates use single-brace placeholders: `{list_name}`, `{from}`,
//! `{subject}` and `{text}`. A doubled brace (`{{` or `}}`) renders as a
//! literal brace. Unrecognized placeholders are left in the output untouched.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::defaults;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// The fields of one incoming list message that feed a notification.
///
/// Header fields are optional because the host's message may lack them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Name of the list the message was posted to
    pub list_name: String,
    /// Raw `From` header
    pub from_header: Option<String>,
    /// Raw `Subject` header
    pub subject: Option<String>,
    /// Message body text
    pub body_text: Option<String>,
}

impl NotificationRequest {
    /// Creates a request for `list_name` with every header absent.
    #[must_use]
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            ..Self::default()
        }
    }

    /// Sets the sender.
    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from_header = Some(from.into());
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body_text = Some(body.into());
        self
    }

    /// Returns the subject, or the stand-in used when the header is absent.
    #[must_use]
    pub fn subject_or_default(&self) -> &str {
        self.subject.as_deref().unwrap_or(defaults::SUBJECT)
    }

    fn placeholder(&self, name: &str) -> Option<&str> {
        match name {
            "list_name" => Some(&self.list_name),
            "from" => Some(self.from_header.as_deref().unwrap_or_default()),
            "subject" => Some(self.subject_or_default()),
            "text" => Some(self.body_text.as_deref().unwrap_or_default()),
            _ => None,
        }
    }
}

/// Renders `template` with the fields of `request`.
///
/// Substitution is a single pass, so placeholder-like text inside a
/// field value is never expanded.
#[must_use]
pub fn render(template: &str, request: &NotificationRequest) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match caps.get(1) {
            Some(name) => request
                .placeholder(name.as_str())
                .map_or_else(|| caps[0].to_string(), ToString::to_string),
            None => caps[0][..1].to_string(),
        })
        .into_owned()
}
