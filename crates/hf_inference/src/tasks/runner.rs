//! Per-task runners built on [`InferenceClient`]

use serde_json::Value;

use crate::client::{EndpointResponse, InferenceClient, InferenceReply};
use crate::error::{InferenceError, Result};
use crate::tasks::cases::{QaCase, RelevanceCase, SimilarityCase};
use crate::tasks::grading::{judge_answer, AnswerVerdict, SimilarityGrade};
use crate::tasks::payload::{self, QaAnswer};

/// First candidate model that answered a question-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuestions {
    pub model: String,
    pub reply: InferenceReply,
}

/// Similarity between a reference answer and a student answer
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityEvaluation {
    pub score: f64,
    pub grade: SimilarityGrade,
}

/// Result of a similarity call that reached the server and answered 2xx
#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityOutcome {
    /// The body started with a numeric score
    Graded(SimilarityEvaluation),
    /// The body was not a list of scores; kept verbatim for display
    Unrecognized(Value),
}

/// Student answer compared with the answer a QA model extracted
#[derive(Debug, Clone, PartialEq)]
pub struct QaEvaluation {
    pub model_answer: QaAnswer,
    pub verdict: AnswerVerdict,
}

/// Try each candidate model in order and stop at the first success
///
/// `observer` sees every attempt, successful or not, in call order.
/// Returns `AllCandidatesFailed` once the list is exhausted.
pub async fn generate_questions<F>(
    client: &InferenceClient,
    candidates: &[&str],
    context: &str,
    mut observer: F,
) -> Result<GeneratedQuestions>
where
    F: FnMut(&str, &EndpointResponse),
{
    if candidates.is_empty() {
        return Err(InferenceError::InvalidRequest(
            "no candidate models given".to_string(),
        ));
    }

    let body = payload::question_generation(context);
    let mut attempted = Vec::with_capacity(candidates.len());

    for &model in candidates {
        attempted.push(model.to_string());

        match client.post(model, &body).await {
            Ok(reply) => {
                observer(model, &EndpointResponse::from(reply.clone()));
                if attempted.len() > 1 {
                    tracing::info!(
                        model,
                        failed = attempted.len() - 1,
                        "question generation succeeded on fallback candidate"
                    );
                }
                return Ok(GeneratedQuestions {
                    model: model.to_string(),
                    reply,
                });
            }
            Err(e) => observer(model, &EndpointResponse::from(e)),
        }
    }

    tracing::warn!(attempted = ?attempted, "no question generation candidate succeeded");
    Err(InferenceError::AllCandidatesFailed { attempted })
}

/// Embed a reference answer and a student answer and grade their similarity
///
/// A 2xx body that is not a non-empty list of scores comes back as
/// [`SimilarityOutcome::Unrecognized`] instead of an error.
pub async fn evaluate_similarity(
    client: &InferenceClient,
    model: &str,
    case: &SimilarityCase,
) -> Result<SimilarityOutcome> {
    let body = payload::sentence_similarity(case.reference_answer, &[case.student_answer]);
    let reply = client.post(model, &body).await?;

    let is_score_list = reply.body.as_array().is_some_and(|scores| !scores.is_empty());
    if !is_score_list {
        tracing::debug!(model, "similarity response is not a score list");
        return Ok(SimilarityOutcome::Unrecognized(reply.body));
    }

    let scores = payload::similarity_scores(&reply.body).map_err(|e| with_status(e, &reply))?;
    let score = scores[0];

    Ok(SimilarityOutcome::Graded(SimilarityEvaluation {
        score,
        grade: SimilarityGrade::from_score(score),
    }))
}

/// Ask a QA model the case question and judge the student answer against it
pub async fn evaluate_answer(
    client: &InferenceClient,
    model: &str,
    case: &QaCase,
) -> Result<QaEvaluation> {
    let body = payload::question_answering(case.question, case.context);
    let reply = client.post(model, &body).await?;

    let model_answer = payload::qa_answer(&reply.body).map_err(|e| with_status(e, &reply))?;
    let verdict = judge_answer(case.student_answer, &model_answer.answer);

    Ok(QaEvaluation {
        model_answer,
        verdict,
    })
}

/// Score a query/answer pair with a cross-encoder; the body is model-defined
pub async fn score_relevance(
    client: &InferenceClient,
    model: &str,
    case: &RelevanceCase,
) -> Result<InferenceReply> {
    let body = payload::text_pair(case.query, case.answer);
    client.post(model, &body).await
}

fn with_status(err: InferenceError, reply: &InferenceReply) -> InferenceError {
    match err {
        InferenceError::Parse { status: None, reason } => InferenceError::Parse {
            status: Some(reply.status_code),
            reason,
        },
        other => other,
    }
}
