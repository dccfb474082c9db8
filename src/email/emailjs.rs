//! EmailJS REST client.

use super::EmailDispatcher;
use crate::model::{ContactPayload, SendError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Public EmailJS send endpoint.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `[emailjs]` settings. Every field must be present for sending to work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailJsConfig {
    /// EmailJS service to send through.
    #[serde(default)]
    pub service_id: Option<String>,
    /// Template that renders the payload fields.
    #[serde(default)]
    pub template_id: Option<String>,
    /// Account public key, sent as `user_id`.
    #[serde(default)]
    pub public_key: Option<String>,
}

impl EmailJsConfig {
    /// Fill unset fields from `other`.
    pub fn or(self, other: EmailJsConfig) -> Self {
        Self {
            service_id: self.service_id.or(other.service_id),
            template_id: self.template_id.or(other.template_id),
            public_key: self.public_key.or(other.public_key),
        }
    }
}

/// Request body accepted by the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Blocking EmailJS client with every credential present.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, SendError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(SendError::NotConfigured(name))
}

impl EmailJsClient {
    /// Build a client, failing with [`SendError::NotConfigured`] on the first blank setting.
    pub fn from_config(config: &EmailJsConfig) -> Result<Self, SendError> {
        let service_id = required(&config.service_id, "service_id")?;
        let template_id = required(&config.template_id, "template_id")?;
        let public_key = required(&config.public_key, "public_key")?;
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id,
            template_id,
            public_key,
        })
    }

    /// Point the client at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// URL messages are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

impl EmailDispatcher for EmailJsClient {
    fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        debug!(endpoint = %self.endpoint, "sending contact message");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&self.request(payload))
            .send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(SendError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
