//! The HTTP collaborator that receives submissions.

use crate::error::BuildError;
use crate::submit::config::SubmitConfig;
use crate::submit::error::SubmitError;
use reqwest::{Client, Url};
use serde_json::Value;
use std::future::Future;
use tracing::debug;

/// Something that accepts a JSON payload and answers with a JSON body.
pub trait Endpoint: Send + Sync {
    fn post(&self, payload: &Value) -> impl Future<Output = Result<Value, SubmitError>> + Send;
}

/// `POST`s submissions as JSON over HTTP.
#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    client: Client,
    url: Url,
}

impl HttpEndpoint {
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    pub fn from_config(config: &SubmitConfig) -> Result<Self, BuildError> {
        Ok(Self::new(config.endpoint_url()?))
    }

    /// Reuse an existing client (connection pool, proxies, TLS settings).
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Endpoint for HttpEndpoint {
    async fn post(&self, payload: &Value) -> Result<Value, SubmitError> {
        debug!(url = %self.url, "posting submission");
        let response = self.client.post(self.url.clone()).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        // Error bodies are never parsed; success bodies are echoed as-is,
        // falling back to a JSON string when the endpoint sends plain text.
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
