//! Webhook layer: notification rendering and delivery.
//!
//! This module provides:
//! - HTTP request/response types and the client trait ([`HttpRequest`],
//!   [`HttpResponse`], [`HttpClient`])
//! - The production client ([`ReqwestClient`])
//! - Template rendering ([`render`], [`NotificationRequest`])
//! - Routed, classified delivery ([`Notifier`], [`DeliveryOutcome`])

mod client;
mod error;
mod http;
mod notifier;
mod template;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use notifier::{DeliveryOutcome, Notifier, classify, payload};
pub use template::{NotificationRequest, render};
