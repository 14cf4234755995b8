//! Best-effort delivery of list notifications to chat webhooks.

use std::fmt;
use std::sync::Arc;

use http::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;

use crate::config::RouteTable;

use super::template::{self, NotificationRequest};
use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Classified result of one delivery attempt.
///
/// Outcomes are values, not errors: [`Notifier::notify`] always returns
/// one and never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The webhook accepted the notification.
    Sent,
    /// No destination is configured for the list; nothing was sent.
    SkippedNoUrl,
    /// The webhook answered, but not with a success.
    RemoteRejected(String),
    /// The webhook could not be reached.
    TransportError(String),
}

impl DeliveryOutcome {
    /// Returns true if the notification was accepted.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Returns true for outcomes an operator should look at.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::RemoteRejected(_) | Self::TransportError(_))
    }

    /// Short machine-friendly label, used as a log field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::SkippedNoUrl => "skipped_no_url",
            Self::RemoteRejected(_) => "remote_rejected",
            Self::TransportError(_) => "transport_error",
        }
    }

    /// Failure detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::RemoteRejected(detail) | Self::TransportError(detail) => Some(detail),
            Self::Sent | Self::SkippedNoUrl => None,
        }
    }
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {detail}", self.label()),
            None => f.write_str(self.label()),
        }
    }
}

/// Turns one inbound list message into at most one webhook call.
///
/// The route table is shared read-only; the notifier itself holds no
/// per-call state, so one instance serves every message of the process.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use list_hook::config::RouteTable;
/// use list_hook::webhook::{NotificationRequest, Notifier, ReqwestClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let routes = RouteTable::default().with_route("announce", "https://chat.example/hook1");
/// let client = ReqwestClient::with_timeout(Duration::from_secs(10))?;
/// let notifier = Notifier::new(client, Arc::new(routes));
///
/// let request = NotificationRequest::new("announce")
///     .with_from("a@x.com")
///     .with_subject("Hi")
///     .with_body("body");
/// let outcome = notifier.notify("announce", &request).await;
/// println!("{outcome}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Notifier<H> {
    client: H,
    routes: Arc<RouteTable>,
}

impl<H> Notifier<H> {
    /// Creates a notifier that delivers through `client` using `routes`.
    #[must_use]
    pub const fn new(client: H, routes: Arc<RouteTable>) -> Self {
        Self { client, routes }
    }

    /// Returns the route table in use.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

impl<H: HttpClient> Notifier<H> {
    /// Renders, routes and delivers a notification for `list_id`.
    ///
    /// Performs no network call when the resolved destination is empty.
    /// Every outcome other than [`DeliveryOutcome::Sent`] is logged with the
    /// list, destination and detail.
    pub async fn notify(&self, list_id: &str, request: &NotificationRequest) -> DeliveryOutcome {
        let text = template::render(self.routes.template(), request);
        let destination = self.routes.resolve(list_id);

        if destination.is_empty() {
            tracing::info!(list = list_id, "No webhook URL configured, skipping notification");
            return DeliveryOutcome::SkippedNoUrl;
        }

        let outcome = self.deliver(destination, &text).await;
        report(list_id, destination, &outcome);
        outcome
    }

    async fn deliver(&self, destination: &str, text: &str) -> DeliveryOutcome {
        let url = match url::Url::parse(destination) {
            Ok(url) => url,
            Err(e) => {
                let err = HttpError::InvalidUrl(format!("{destination}: {e}"));
                return DeliveryOutcome::TransportError(err.to_string());
            }
        };

        let request = HttpRequest::post(url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(payload(text));

        match self.client.request(request).await {
            Ok(response) => classify(&response),
            Err(e) => DeliveryOutcome::TransportError(e.to_string()),
        }
    }
}

/// Builds the `{"text": ...}` request body.
#[must_use]
pub fn payload(text: &str) -> Vec<u8> {
    serde_json::json!({ "text": text }).to_string().into_bytes()
}

/// Most response body bytes quoted in an outcome detail.
const DETAIL_BODY_LIMIT: usize = 512;

/// Classifies a webhook response.
///
/// Only status 200 with a JSON object carrying a truthy `success` field
/// counts as delivered. Rejection details quote at most 512 bytes of the
/// body.
#[must_use]
pub fn classify(response: &HttpResponse) -> DeliveryOutcome {
    if response.status != http::StatusCode::OK {
        return DeliveryOutcome::RemoteRejected(format!(
            "HTTP status {}: {}",
            response.status,
            response.body_excerpt(DETAIL_BODY_LIMIT)
        ));
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Ok(Value::Object(map)) if map.get("success").is_some_and(is_truthy) => {
            DeliveryOutcome::Sent
        }
        Ok(Value::Object(_)) => DeliveryOutcome::RemoteRejected(format!(
            "Webhook reported failure: {}",
            response.body_excerpt(DETAIL_BODY_LIMIT)
        )),
        Ok(_) => DeliveryOutcome::RemoteRejected(format!(
            "Response is not a JSON object: {}",
            response.body_excerpt(DETAIL_BODY_LIMIT)
        )),
        Err(e) => DeliveryOutcome::RemoteRejected(format!("Response is not valid JSON: {e}")),
    }
}

/// Truthiness of a JSON value: null, false, zero and empty containers are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn report(list_id: &str, destination: &str, outcome: &DeliveryOutcome) {
    match outcome {
        DeliveryOutcome::Sent => {
            tracing::debug!(list = list_id, url = destination, "Notification delivered");
        }
        DeliveryOutcome::SkippedNoUrl => {}
        DeliveryOutcome::RemoteRejected(detail) => {
            tracing::error!(
                list = list_id,
                url = destination,
                outcome = outcome.label(),
                "Webhook rejected notification: {detail}"
            );
        }
        DeliveryOutcome::TransportError(detail) => {
            tracing::error!(
                list = list_id,
                url = destination,
                outcome = outcome.label(),
                "Webhook unreachable: {detail}"
            );
        }
    }
}
