//! Client for hosted text-inference endpoints

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use super::types::{EndpointRequest, EndpointResponse, InferenceReply};
use crate::config::ClientConfig;
use crate::error::{truncate_diagnostic, InferenceError, Result};

/// Status codes treated as success: `[200, 299)`
pub fn is_success_status(status: u16) -> bool {
    (200..299).contains(&status)
}

/// Sends single POST requests to `<base_url>/<endpoint_name>`
///
/// Every call is independent: no retries, no backoff, no cached state
/// between calls.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    config: ClientConfig,
    http: Client,
}

impl InferenceClient {
    /// Create a new InferenceClient
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| InferenceError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Create a client from `HUGGINGFACE_API_KEY` and friends
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the full URL for an endpoint name
    pub fn endpoint_url(&self, endpoint_name: &str) -> Result<Url> {
        let name = endpoint_name.trim().trim_start_matches('/');
        if name.is_empty() {
            return Err(InferenceError::InvalidRequest(
                "endpoint name must not be empty".to_string(),
            ));
        }

        let raw = format!("{}/{}", self.config.base_url.trim_end_matches('/'), name);
        Url::parse(&raw)
            .map_err(|e| InferenceError::InvalidRequest(format!("invalid endpoint URL {}: {}", raw, e)))
    }

    /// Build a request that carries the configured API key
    pub fn request<P>(&self, endpoint_name: &str, payload: &P) -> Result<EndpointRequest>
    where
        P: Serialize + ?Sized,
    {
        EndpointRequest::new(endpoint_name, payload, self.config.api_key.as_str())
    }

    /// Call an endpoint with the configured API key
    pub async fn post<P>(&self, endpoint_name: &str, payload: &P) -> Result<InferenceReply>
    where
        P: Serialize + ?Sized,
    {
        let request = self.request(endpoint_name, payload)?;
        self.call(&request).await
    }

    /// Call an endpoint and fold the outcome into an [`EndpointResponse`]
    ///
    /// Never fails: every error becomes `EndpointResponse::Failure`.
    pub async fn invoke(
        &self,
        endpoint_name: &str,
        payload: &Value,
        auth_token: &str,
    ) -> EndpointResponse {
        let result = match EndpointRequest::from_value(endpoint_name, payload.clone(), auth_token)
        {
            Ok(request) => self.call(&request).await,
            Err(e) => Err(e),
        };
        result.into()
    }

    /// Send one request and classify the result
    pub async fn call(&self, request: &EndpointRequest) -> Result<InferenceReply> {
        let url = self.endpoint_url(&request.endpoint_name)?;
        let endpoint = request.endpoint_name.as_str();

        tracing::debug!(endpoint, url = %url, "POST inference request");

        let result = self.send(url, request).await;
        match &result {
            Ok(reply) => {
                tracing::debug!(endpoint, status = reply.status_code, "inference request succeeded");
            }
            Err(e) => {
                tracing::warn!(
                    endpoint,
                    status = ?e.status_code(),
                    error = %e.diagnostic(),
                    "inference request failed"
                );
            }
        }
        result
    }

    async fn send(&self, url: Url, request: &EndpointRequest) -> Result<InferenceReply> {
        let endpoint = &request.endpoint_name;

        let response = self
            .http
            .post(url)
            .bearer_auth(&request.auth_token)
            .header(CONTENT_TYPE, "application/json")
            .json(&request.payload)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        // The status line has arrived; from here on every failure keeps it
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| body_read_error(status, e))?;

        if !is_success_status(status) {
            return Err(InferenceError::Http {
                status,
                body: truncate_diagnostic(&text),
            });
        }

        // Body first so the truncated diagnostic shows what the server sent
        let body = serde_json::from_str::<Value>(&text).map_err(|e| InferenceError::Parse {
            status: Some(status),
            reason: format!("{} [invalid JSON: {}]", text, e),
        })?;

        Ok(InferenceReply {
            status_code: status,
            body,
        })
    }
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> InferenceError {
    if err.is_timeout() {
        InferenceError::Timeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        InferenceError::Transport {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        }
    }
}

fn body_read_error(status: u16, err: reqwest::Error) -> InferenceError {
    let reason = format!("failed to read response body: {}", err);
    if is_success_status(status) {
        InferenceError::Parse {
            status: Some(status),
            reason,
        }
    } else {
        InferenceError::Http {
            status,
            body: truncate_diagnostic(&reason),
        }
    }
}
