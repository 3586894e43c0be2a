//! Task-level helpers for the smoke-test suites
//!
//! This module contains:
//! - `payload`: Request payloads and response readers per task type
//! - `grading`: Similarity grades and answer verdicts
//! - `cases`: Fixed models and test cases
//! - `runner`: One function per task, built on `InferenceClient`

pub mod cases;
mod grading;
pub mod payload;
mod runner;

pub use cases::{
    QaCase, RelevanceCase, SimilarityCase, CROSS_ENCODER_MODEL, QA_CASES,
    QUESTION_ANSWERING_MODEL, QUESTION_GENERATION_CONTEXT, QUESTION_GENERATION_MODELS,
    RELEVANCE_CASES, SIMILARITY_CASES, SIMILARITY_MODEL,
};
pub use grading::{judge_answer, AnswerVerdict, SimilarityGrade};
pub use payload::{qa_answer, similarity_scores, InferencePayload, QaAnswer};
pub use runner::{
    evaluate_answer, evaluate_similarity, generate_questions, score_relevance,
    GeneratedQuestions, QaEvaluation, SimilarityEvaluation, SimilarityOutcome,
};
