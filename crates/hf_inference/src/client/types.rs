//! Request and response types for a single endpoint call

use serde::Serialize;
use serde_json::Value;

use crate::error::{FailureKind, InferenceError, Result};

/// One call to a named inference endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointRequest {
    pub endpoint_name: String,
    pub payload: Value,
    /// May be empty; the remote service decides whether to accept it
    pub auth_token: String,
}

impl EndpointRequest {
    /// Build a request from any serializable payload
    pub fn new<P>(
        endpoint_name: impl Into<String>,
        payload: &P,
        auth_token: impl Into<String>,
    ) -> Result<Self>
    where
        P: Serialize + ?Sized,
    {
        let payload = serde_json::to_value(payload).map_err(|e| {
            InferenceError::InvalidRequest(format!("payload is not JSON-serializable: {}", e))
        })?;
        Self::from_value(endpoint_name, payload, auth_token)
    }

    /// Build a request from an already-encoded JSON payload
    pub fn from_value(
        endpoint_name: impl Into<String>,
        payload: Value,
        auth_token: impl Into<String>,
    ) -> Result<Self> {
        let endpoint_name = endpoint_name.into().trim().to_string();
        if endpoint_name.is_empty() {
            return Err(InferenceError::InvalidRequest(
                "endpoint name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            endpoint_name,
            payload,
            auth_token: auth_token.into(),
        })
    }
}

/// Successful reply from an endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceReply {
    pub status_code: u16,
    pub body: Value,
}

/// Classified outcome of one endpoint call
#[derive(Debug, Clone, PartialEq)]
pub enum EndpointResponse {
    Success {
        status_code: u16,
        body: Value,
    },
    Failure {
        status_code: Option<u16>,
        message: String,
        kind: FailureKind,
    },
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success { status_code, .. } => Some(*status_code),
            Self::Failure { status_code, .. } => *status_code,
        }
    }

    /// Parsed body of a successful call
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Success { body, .. } => Some(body),
            Self::Failure { .. } => None,
        }
    }

    /// Diagnostic message of a failed call
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }
}

impl From<InferenceReply> for EndpointResponse {
    fn from(reply: InferenceReply) -> Self {
        Self::Success {
            status_code: reply.status_code,
            body: reply.body,
        }
    }
}

impl From<InferenceError> for EndpointResponse {
    fn from(err: InferenceError) -> Self {
        Self::Failure {
            status_code: err.status_code(),
            message: err.diagnostic(),
            kind: err.kind(),
        }
    }
}

impl From<Result<InferenceReply>> for EndpointResponse {
    fn from(result: Result<InferenceReply>) -> Self {
        match result {
            Ok(reply) => reply.into(),
            Err(err) => err.into(),
        }
    }
}
