//! Configuration module for hf_inference
//!
//! This module contains:
//! - `settings`: Client settings loaded from the environment

mod settings;

pub use settings::{
    parse_timeout_secs, ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, TIMEOUT_SECS_ENV,
};
