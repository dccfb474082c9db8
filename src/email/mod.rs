//! Outbound delivery of contact-form messages.
//!
//! Delivery is a single attempt: the dispatcher reports success or failure
//! and the form decides what to show. Nothing is retried.

/// EmailJS REST client and its settings.
pub mod emailjs;
/// Background thread dispatch.
pub mod worker;

pub use emailjs::{EmailJsClient, EmailJsConfig, EMAILJS_ENDPOINT};
pub use worker::SendWorker;

use crate::model::{ContactPayload, SendError};

/// Accepts a validated payload and reports whether it was delivered.
pub trait EmailDispatcher: Send + Sync {
    /// Deliver one message. Blocks until the service answers.
    fn send(&self, payload: &ContactPayload) -> Result<(), SendError>;
}

/// Dispatcher used when no email service is configured.
///
/// Every send fails with [`SendError::NotConfigured`] naming the first
/// missing setting, so the form still reports a clear failure.
#[derive(Debug, Clone, Copy)]
pub struct Unconfigured(pub &'static str);

impl EmailDispatcher for Unconfigured {
    fn send(&self, _payload: &ContactPayload) -> Result<(), SendError> {
        Err(SendError::NotConfigured(self.0))
    }
}

/// Build the dispatcher for `config`, falling back to [`Unconfigured`].
pub fn dispatcher_from_config(config: &EmailJsConfig) -> Box<dyn EmailDispatcher> {
    match EmailJsClient::from_config(config) {
        Ok(client) => Box::new(client),
        Err(SendError::NotConfigured(missing)) => {
            tracing::info!(missing, "email dispatch disabled");
            Box::new(Unconfigured(missing))
        }
        Err(err) => {
            tracing::warn!(error = %err, "email client could not be built");
            Box::new(Unconfigured("http client"))
        }
    }
}
