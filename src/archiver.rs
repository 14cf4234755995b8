//! Adapter between the mailing-list host and the notifier.
//!
//! The host drives archivers through the [`Archiver`] capability set. Only
//! [`Archiver::archive_message`] does anything here; the URL methods exist
//! because the host requires them and are intentionally inert.

use crate::message::MailMessage;
use crate::webhook::{DeliveryOutcome, HttpClient, NotificationRequest, Notifier};

#[cfg(test)]
#[path = "archiver_tests.rs"]
mod tests;

/// The mailing list a message was posted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailingList {
    /// Short list name, used as the routing key
    pub list_name: String,
}

impl MailingList {
    /// Creates a list handle.
    #[must_use]
    pub fn new(list_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
        }
    }
}

/// Capability set the host expects from an archiver.
pub trait Archiver: Send + Sync {
    /// Name the host registers the archiver under.
    fn name(&self) -> &'static str;

    /// URL of the list's archive, if the archiver keeps one.
    fn list_url(&self, list: &MailingList) -> Option<String>;

    /// Permanent URL of an archived message, if the archiver keeps one.
    fn permalink<M: MailMessage>(&self, list: &MailingList, message: &M) -> Option<String>;

    /// Hands a newly posted message to the archiver.
    ///
    /// Must not fail: the outcome is informational.
    fn archive_message<M: MailMessage + Sync>(
        &self,
        list: &MailingList,
        message: &M,
    ) -> impl std::future::Future<Output = DeliveryOutcome> + Send;
}

/// Archiver that announces each message on a chat webhook.
#[derive(Debug)]
pub struct WebhookArchiver<H> {
    notifier: Notifier<H>,
}

impl<H> WebhookArchiver<H> {
    /// Name under which the host registers this archiver.
    pub const NAME: &'static str = "webhook";

    /// Wraps a notifier.
    #[must_use]
    pub const fn new(notifier: Notifier<H>) -> Self {
        Self { notifier }
    }

    /// Returns the wrapped notifier.
    #[must_use]
    pub const fn notifier(&self) -> &Notifier<H> {
        &self.notifier
    }
}

/// Extracts the notification fields from a host message.
#[must_use]
pub fn request_for<M: MailMessage>(list: &MailingList, message: &M) -> NotificationRequest {
    NotificationRequest {
        list_name: list.list_name.clone(),
        from_header: message.header("from").map(ToString::to_string),
        subject: message.header("subject").map(ToString::to_string),
        body_text: message.payload().map(ToString::to_string),
    }
}

impl<H: HttpClient> Archiver for WebhookArchiver<H> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Chat webhooks keep no archive.
    fn list_url(&self, _list: &MailingList) -> Option<String> {
        None
    }

    /// Chat webhooks keep no archive.
    fn permalink<M: MailMessage>(&self, _list: &MailingList, _message: &M) -> Option<String> {
        None
    }

    async fn archive_message<M: MailMessage + Sync>(
        &self,
        list: &MailingList,
        message: &M,
    ) -> DeliveryOutcome {
        let request = request_for(list, message);
        self.notifier.notify(&list.list_name, &request).await
    }
}
