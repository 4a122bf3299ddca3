//! Push relay adapter.
//!
//! Posts notification payloads to the hosted messaging relay, which owns
//! device fan-out and platform-specific delivery.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{PushError, PushSender};

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    token: &'a str,
    title: &'a str,
    body: &'a str,
}

/// Sends notifications through an HTTP relay endpoint.
pub struct HttpRelaySender {
    client: Client,
    endpoint: String,
    api_key: Secret<String>,
}

impl HttpRelaySender {
    /// Creates a sender targeting `endpoint`, authenticated with
    /// `api_key`.
    pub fn new(endpoint: impl Into<String>, api_key: Secret<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl PushSender for HttpRelaySender {
    async fn send(&self, token: &str, title: &str, body: &str) -> Result<(), PushError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&RelayPayload { token, title, body })
            .send()
            .await
            .map_err(|e| PushError::Unavailable(e.to_string()))?;

        match response.status().as_u16() {
            200..=299 => Ok(()),
            404 | 410 => Err(PushError::TokenRejected),
            status => Err(PushError::Unavailable(format!(
                "relay returned status {}",
                status
            ))),
        }
    }
}
