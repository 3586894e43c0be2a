//! qa-eval - smoke tests for question generation and answer evaluation endpoints
//!
//! Usage:
//!     qa-eval [OPTIONS]
//!
//! Environment Variables:
//!     HUGGINGFACE_API_KEY: Bearer token for the inference API (default: empty)
//!     HF_INFERENCE_BASE_URL: Base URL model ids are appended to
//!     HF_INFERENCE_TIMEOUT_SECS: Total request timeout in seconds
//!     RUST_LOG: Log filter for stderr diagnostics (default: warn)

mod summary;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hf_inference::tasks::{
    CROSS_ENCODER_MODEL, QA_CASES, QUESTION_ANSWERING_MODEL, QUESTION_GENERATION_CONTEXT,
    QUESTION_GENERATION_MODELS, RELEVANCE_CASES, SIMILARITY_CASES, SIMILARITY_MODEL,
};
use hf_inference::{
    evaluate_answer, evaluate_similarity, generate_questions, parse_timeout_secs, score_relevance,
    ClientConfig, EndpointResponse, InferenceClient, InferenceError, SimilarityOutcome,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Question generation & answer evaluation smoke test
#[derive(Parser, Debug)]
#[command(name = "qa-eval")]
#[command(about = "Question generation & answer evaluation smoke test")]
#[command(after_help = r#"Examples:
    # Run every suite against the hosted API
    HUGGINGFACE_API_KEY=hf_xxx qa-eval

    # Only the QA and similarity suites
    qa-eval --suite qa --suite similarity

    # Point at a local stub and skip the summary
    qa-eval --base-url http://localhost:8080/models --no-summary
"#)]
struct Cli {
    /// Base URL that model ids are appended to [env: HF_INFERENCE_BASE_URL]
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token for the inference API [env: HUGGINGFACE_API_KEY]
    #[arg(long)]
    api_key: Option<String>,

    /// Total request timeout in seconds [env: HF_INFERENCE_TIMEOUT_SECS]
    #[arg(long, value_parser = parse_timeout_arg)]
    timeout: Option<Duration>,

    /// Suites to run, in the fixed order (default: all)
    #[arg(long = "suite", value_enum)]
    suites: Vec<Suite>,

    /// Skip the effectiveness summary
    #[arg(long)]
    no_summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Suite {
    QuestionGeneration,
    Similarity,
    Qa,
    Relevance,
}

impl Suite {
    const ALL: [Suite; 4] = [
        Suite::QuestionGeneration,
        Suite::Similarity,
        Suite::Qa,
        Suite::Relevance,
    ];
}

/// Pick the suites to run, keeping the fixed order
fn selected_suites(requested: &[Suite]) -> Vec<Suite> {
    Suite::ALL
        .into_iter()
        .filter(|suite| requested.is_empty() || requested.contains(suite))
        .collect()
}

fn parse_timeout_arg(value: &str) -> std::result::Result<Duration, String> {
    parse_timeout_secs(value)
        .ok_or_else(|| format!("expected a positive number of seconds, got '{}'", value))
}

/// Apply explicit flags on top of the environment-derived config
fn build_config(args: &Cli, mut config: ClientConfig) -> ClientConfig {
    if let Some(base_url) = args.base_url.as_deref().map(str::trim) {
        if !base_url.is_empty() {
            config.base_url = base_url.to_string();
        }
    }
    if let Some(api_key) = &args.api_key {
        config = config.with_api_key(api_key);
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }
    config
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Print a failed call the same way for every suite
fn print_failure(err: &InferenceError) {
    if let Some(status) = err.status_code() {
        println!("Status: {}", status);
    }
    println!("Error: {}", err.diagnostic());
}

async fn run_question_generation(client: &InferenceClient) {
    let result = generate_questions(
        client,
        QUESTION_GENERATION_MODELS,
        QUESTION_GENERATION_CONTEXT,
        |model, response| {
            println!("\nTesting Question Generation: {}", model);
            println!("{}", "-".repeat(60));
            match response {
                EndpointResponse::Success { status_code, body } => {
                    println!("\u{2713} Success!");
                    println!("Status Code: {}", status_code);
                    println!("Generated Questions:");
                    println!("{}", pretty(body));
                }
                EndpointResponse::Failure {
                    status_code,
                    message,
                    ..
                } => {
                    println!("\u{2717} Failed with {}", model);
                    if let Some(status) = status_code {
                        println!("Status: {}", status);
                    }
                    println!("Error: {}", message);
                }
            }
        },
    )
    .await;

    if let Err(e) = result {
        println!("\n\u{2717} {}", e);
    }
}

async fn run_similarity(client: &InferenceClient) {
    banner("Testing Answer Evaluation (Semantic Similarity)");

    for (i, case) in SIMILARITY_CASES.iter().enumerate() {
        println!("\nTest Case {}:", i + 1);
        println!("Question: {}", case.question);
        println!("Correct Answer: {}", case.reference_answer);
        println!("Student Answer: {}", case.student_answer);
        println!("{}", "-".repeat(60));

        match evaluate_similarity(client, SIMILARITY_MODEL, case).await {
            Ok(SimilarityOutcome::Graded(evaluation)) => {
                println!("\u{2713} Similarity Score: {:.4}", evaluation.score);
                println!("Grade: {}", evaluation.grade);
            }
            Ok(SimilarityOutcome::Unrecognized(body)) => {
                println!("Response: {}", pretty(&body));
            }
            Err(e) => {
                println!("\u{2717} Failed!");
                print_failure(&e);
            }
        }
    }
}

async fn run_question_answering(client: &InferenceClient) {
    banner("Testing Answer Correctness (QA Model)");

    for (i, case) in QA_CASES.iter().enumerate() {
        println!("\nTest Case {}:", i + 1);
        println!("Question: {}", case.question);
        println!("Student Answer: {}", case.student_answer);
        println!("{}", "-".repeat(60));

        match evaluate_answer(client, QUESTION_ANSWERING_MODEL, case).await {
            Ok(evaluation) => {
                println!(
                    "\u{2713} Model's Expected Answer: {}",
                    evaluation.model_answer.answer
                );
                println!("Confidence: {:.4}", evaluation.model_answer.score);
                println!("Evaluation: {}", evaluation.verdict);
            }
            Err(e) => {
                println!("\u{2717} Failed!");
                print_failure(&e);
            }
        }
    }
}

async fn run_relevance(client: &InferenceClient) {
    banner("Testing Answer Quality (Cross-Encoder)");

    for (i, case) in RELEVANCE_CASES.iter().enumerate() {
        println!("\nTest Case {}:", i + 1);
        println!("Question: {}", case.query);
        println!("Answer: {}", case.answer);
        println!("{}", "-".repeat(60));

        match score_relevance(client, CROSS_ENCODER_MODEL, case).await {
            Ok(reply) => {
                println!("\u{2713} Relevance Score: {}", reply.body);
                println!("Response: {}", pretty(&reply.body));
            }
            Err(e) => {
                println!("\u{2717} Failed!");
                print_failure(&e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    let config = build_config(&args, ClientConfig::from_env());
    let client = InferenceClient::new(config).context("failed to create inference client")?;

    if client.config().api_key.is_empty() {
        tracing::warn!("HUGGINGFACE_API_KEY is empty; the API may reject unauthenticated calls");
    }

    println!("{}", "=".repeat(60));
    println!("QUESTION GENERATION & ANSWER EVALUATION TEST");
    println!("{}", "=".repeat(60));

    for suite in selected_suites(&args.suites) {
        match suite {
            Suite::QuestionGeneration => run_question_generation(&client).await,
            Suite::Similarity => run_similarity(&client).await,
            Suite::Qa => run_question_answering(&client).await,
            Suite::Relevance => run_relevance(&client).await,
        }
    }

    if !args.no_summary {
        summary::print_effectiveness_summary();
    }

    banner("Testing Complete!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_suites_default_is_all_in_order() {
        assert_eq!(selected_suites(&[]), Suite::ALL.to_vec());
    }

    #[test]
    fn test_selected_suites_keeps_fixed_order() {
        assert_eq!(
            selected_suites(&[Suite::Relevance, Suite::Qa]),
            vec![Suite::Qa, Suite::Relevance]
        );
    }

    #[test]
    fn test_cli_defaults() {
        let args = Cli::try_parse_from(["qa-eval", "--api-key", "hf_test"]).unwrap();
        assert_eq!(args.api_key.as_deref(), Some("hf_test"));
        assert!(args.base_url.is_none());
        assert!(args.timeout.is_none());
        assert!(args.suites.is_empty());
        assert!(!args.no_summary);
    }

    #[test]
    fn test_cli_suite_names() {
        let args = Cli::try_parse_from([
            "qa-eval",
            "--suite",
            "question-generation",
            "--suite",
            "relevance",
        ])
        .unwrap();
        assert_eq!(args.suites, vec![Suite::QuestionGeneration, Suite::Relevance]);
    }

    #[test]
    fn test_timeout_flag_rejects_non_positive() {
        assert!(Cli::try_parse_from(["qa-eval", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["qa-eval", "--timeout=-3"]).is_err());
        assert!(Cli::try_parse_from(["qa-eval", "--timeout", "soon"]).is_err());
    }

    #[test]
    fn test_build_config_keeps_env_rules_without_flags() {
        let env = |key: &str| match key {
            "HF_INFERENCE_TIMEOUT_SECS" => Some("soon".to_string()),
            "HF_INFERENCE_BASE_URL" => Some("  ".to_string()),
            "HUGGINGFACE_API_KEY" => Some("hf_env".to_string()),
            _ => None,
        };
        let args = Cli::try_parse_from(["qa-eval"]).unwrap();
        let config = build_config(&args, ClientConfig::from_lookup(env));

        assert_eq!(config.base_url, hf_inference::DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "hf_env");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_build_config_ignores_zero_env_timeout() {
        let env = |key: &str| (key == "HF_INFERENCE_TIMEOUT_SECS").then(|| "0".to_string());
        let args = Cli::try_parse_from(["qa-eval"]).unwrap();
        let config = build_config(&args, ClientConfig::from_lookup(env));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_build_config_flags_override_env() {
        let env = |key: &str| match key {
            "HF_INFERENCE_TIMEOUT_SECS" => Some("30".to_string()),
            "HF_INFERENCE_BASE_URL" => Some("http://env:1/models".to_string()),
            "HUGGINGFACE_API_KEY" => Some("hf_env".to_string()),
            _ => None,
        };
        let args = Cli::try_parse_from([
            "qa-eval",
            "--base-url",
            "http://localhost:8080/models",
            "--api-key",
            "hf_flag",
            "--timeout",
            "1.5",
        ])
        .unwrap();
        let config = build_config(&args, ClientConfig::from_lookup(env));

        assert_eq!(config.base_url, "http://localhost:8080/models");
        assert_eq!(config.api_key, "hf_flag");
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }
}
