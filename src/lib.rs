//! list-hook: mailing list to chat webhook notifier
//!
//! A library for announcing new mailing-list messages on chat webhooks,
//! with per-list routing and a global fallback destination.

pub mod archiver;
pub mod config;
pub mod message;
pub mod webhook;
