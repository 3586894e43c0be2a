//! Inference client module
//!
//! This module provides:
//! - `inference`: HTTP client for hosted inference endpoints
//! - `types`: Request and response types for one call

mod inference;
mod types;

pub use inference::{is_success_status, InferenceClient};
pub use types::{EndpointRequest, EndpointResponse, InferenceReply};
