//! Request payloads and response readers for the supported task types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InferenceError, Result};

/// Top-level `{"inputs": ...}` envelope shared by every task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InferencePayload<T> {
    pub inputs: T,
}

impl<T: Serialize> InferencePayload<T> {
    pub fn new(inputs: T) -> Self {
        Self { inputs }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityInputs<'a> {
    pub source_sentence: &'a str,
    pub sentences: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAnsweringInputs<'a> {
    pub question: &'a str,
    pub context: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPairInputs<'a> {
    pub text: &'a str,
    pub text_pair: &'a str,
}

/// `{"inputs": "<context>"}`
pub fn question_generation(context: &str) -> InferencePayload<&str> {
    InferencePayload::new(context)
}

/// `{"inputs": {"source_sentence": ..., "sentences": [...]}}`
pub fn sentence_similarity<'a>(
    source_sentence: &'a str,
    sentences: &[&'a str],
) -> InferencePayload<SimilarityInputs<'a>> {
    InferencePayload::new(SimilarityInputs {
        source_sentence,
        sentences: sentences.to_vec(),
    })
}

/// `{"inputs": {"question": ..., "context": ...}}`
pub fn question_answering<'a>(
    question: &'a str,
    context: &'a str,
) -> InferencePayload<QuestionAnsweringInputs<'a>> {
    InferencePayload::new(QuestionAnsweringInputs { question, context })
}

/// `{"inputs": {"text": ..., "text_pair": ...}}`
pub fn text_pair<'a>(text: &'a str, text_pair: &'a str) -> InferencePayload<TextPairInputs<'a>> {
    InferencePayload::new(TextPairInputs { text, text_pair })
}

/// Answer returned by an extractive question-answering model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QaAnswer {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

/// Read a sentence-similarity body: a non-empty list of numbers
pub fn similarity_scores(body: &Value) -> Result<Vec<f64>> {
    let items = body.as_array().ok_or_else(|| InferenceError::Parse {
        status: None,
        reason: format!("expected a list of similarity scores, got {}", body),
    })?;

    if items.is_empty() {
        return Err(InferenceError::Parse {
            status: None,
            reason: "similarity response is an empty list".to_string(),
        });
    }

    items
        .iter()
        .map(|item| {
            item.as_f64().ok_or_else(|| InferenceError::Parse {
                status: None,
                reason: format!("similarity score is not a number: {}", item),
            })
        })
        .collect()
}

/// Read a question-answering body: a JSON object with `answer` and `score`
pub fn qa_answer(body: &Value) -> Result<QaAnswer> {
    if !body.is_object() {
        return Err(InferenceError::Parse {
            status: None,
            reason: format!("expected a question-answering object, got {}", body),
        });
    }

    QaAnswer::deserialize(body).map_err(|e| InferenceError::Parse {
        status: None,
        reason: format!("malformed question-answering response: {}", e),
    })
}
