//! hf_inference: client for hosted text-inference endpoints
//!
//! This library provides:
//! - `InferenceClient` for single POST calls to `<base_url>/<model_id>`
//! - Classified outcomes (`EndpointResponse`) and a `Result` API
//! - Typed payloads for question generation, sentence similarity,
//!   extractive question answering and cross-encoder relevance
//! - Grading helpers and the fixed smoke-test cases
//!
//! # Example
//!
//! ```no_run
//! use hf_inference::{ClientConfig, InferenceClient};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = InferenceClient::new(ClientConfig::from_env()).unwrap();
//!     let response = client
//!         .invoke(
//!             "deepset/roberta-base-squad2",
//!             &json!({"inputs": {"question": "Who created Python?", "context": "Guido did."}}),
//!             "hf_xxx",
//!         )
//!         .await;
//!     println!("{:?}", response);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod tasks;

pub use error::{truncate_diagnostic, FailureKind, InferenceError, Result, DIAGNOSTIC_LIMIT};

pub use config::{
    parse_timeout_secs, ClientConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL,
    TIMEOUT_SECS_ENV,
};

pub use client::{
    is_success_status, EndpointRequest, EndpointResponse, InferenceClient, InferenceReply,
};

pub use tasks::{
    evaluate_answer, evaluate_similarity, generate_questions, judge_answer, score_relevance,
    AnswerVerdict, GeneratedQuestions, QaEvaluation, SimilarityEvaluation, SimilarityGrade,
    SimilarityOutcome,
};
