//! HTTP dispatcher: POSTs the combined plan to the scraping backend.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::BackendConfig;
use crate::domain::{HarvestError, ScrapePlan};
use crate::ports::{DispatchOutcome, Dispatcher};

/// Header carrying the shared secret.
const API_KEY_HEADER: &str = "x-api-key";

/// Dispatcher backed by a shared reqwest client.
///
/// The timeout from `BackendConfig` is baked into the client, so every call
/// is bounded; an expired call surfaces as `TransportError("timeout")`.
pub struct HttpDispatcher {
    client: Client,
    config: BackendConfig,
}

impl HttpDispatcher {
    pub fn new(config: BackendConfig) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| HarvestError::Transport(format!("http client init: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn dispatch(&self, plan: &ScrapePlan) -> DispatchOutcome {
        tracing::info!(endpoint = %self.config.endpoint, "dispatching scrape plan to backend");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(plan)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                match response.json::<serde_json::Value>().await {
                    Ok(result) => DispatchOutcome::Success(result),
                    Err(e) => DispatchOutcome::TransportError(format!(
                        "could not decode backend response: {e}"
                    )),
                }
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
                DispatchOutcome::BackendError { status, body }
            }
            Err(e) if e.is_timeout() => DispatchOutcome::TransportError("timeout".to_string()),
            Err(e) => DispatchOutcome::TransportError(e.to_string()),
        }
    }
}
