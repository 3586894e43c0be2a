//! Task runners against a stub inference server

use hf_inference::tasks::{QaCase, RelevanceCase, SimilarityCase, QA_CASES, SIMILARITY_CASES};
use hf_inference::{
    evaluate_answer, evaluate_similarity, generate_questions, score_relevance, AnswerVerdict,
    ClientConfig, EndpointResponse, InferenceClient, InferenceError, SimilarityGrade,
    SimilarityOutcome,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InferenceClient {
    InferenceClient::new(ClientConfig::new(format!("{}/models", server.uri())).with_api_key("token"))
        .expect("build client")
}

#[tokio::test]
async fn test_generate_questions_falls_back_to_next_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/first/qg"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/second/qg"))
        .and(body_json(json!({"inputs": "Python was released in 1991."})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"generated_text": "When was Python released?"}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/third/qg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut seen = Vec::new();
    let generated = generate_questions(
        &client_for(&server),
        &["first/qg", "second/qg", "third/qg"],
        "Python was released in 1991.",
        |model, response| seen.push((model.to_string(), response.status_code())),
    )
    .await
    .expect("second candidate succeeds");

    assert_eq!(generated.model, "second/qg");
    assert_eq!(
        generated.reply.body[0]["generated_text"],
        "When was Python released?"
    );
    assert_eq!(
        seen,
        vec![
            ("first/qg".to_string(), Some(404)),
            ("second/qg".to_string(), Some(200)),
        ]
    );
}

#[tokio::test]
async fn test_generate_questions_all_candidates_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
        .mount(&server)
        .await;

    let mut failures = 0;
    let err = generate_questions(
        &client_for(&server),
        &["a/qg", "b/qg"],
        "context",
        |_, response| {
            if let EndpointResponse::Failure { .. } = response {
                failures += 1;
            }
        },
    )
    .await
    .unwrap_err();

    assert_eq!(failures, 2);
    match err {
        InferenceError::AllCandidatesFailed { attempted } => {
            assert_eq!(attempted, vec!["a/qg".to_string(), "b/qg".to_string()]);
        }
        other => panic!("expected AllCandidatesFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_questions_requires_candidates() {
    let server = MockServer::start().await;
    let err = generate_questions(&client_for(&server), &[], "context", |_, _| {})
        .await
        .unwrap_err();
    assert!(matches!(err, InferenceError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_evaluate_similarity_grades_first_score() {
    let server = MockServer::start().await;
    let case = SIMILARITY_CASES[1];

    Mock::given(method("POST"))
        .and(path("/models/sentence-transformers/all-MiniLM-L6-v2"))
        .and(body_json(json!({
            "inputs": {
                "source_sentence": "Guido van Rossum",
                "sentences": ["It was created by Guido"]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([0.6512])))
        .mount(&server)
        .await;

    let outcome = evaluate_similarity(
        &client_for(&server),
        "sentence-transformers/all-MiniLM-L6-v2",
        &case,
    )
    .await
    .expect("similarity evaluation");

    let evaluation = match outcome {
        SimilarityOutcome::Graded(evaluation) => evaluation,
        other => panic!("expected a graded outcome, got {:?}", other),
    };

    assert_eq!(evaluation.score, 0.6512);
    assert_eq!(evaluation.grade, SimilarityGrade::Good);
}

#[tokio::test]
async fn test_evaluate_similarity_object_body_is_unrecognized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Model is loading"})),
        )
        .mount(&server)
        .await;

    let case = SimilarityCase {
        question: "q",
        reference_answer: "a",
        student_answer: "b",
    };
    let outcome = evaluate_similarity(&client_for(&server), "sim/model", &case)
        .await
        .expect("2xx body is not an error");

    assert_eq!(
        outcome,
        SimilarityOutcome::Unrecognized(json!({"error": "Model is loading"}))
    );
}

#[tokio::test]
async fn test_evaluate_similarity_empty_list_is_unrecognized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let outcome = evaluate_similarity(&client_for(&server), "sim/model", &SIMILARITY_CASES[0])
        .await
        .expect("2xx body is not an error");

    assert_eq!(outcome, SimilarityOutcome::Unrecognized(json!([])));
}

#[tokio::test]
async fn test_evaluate_similarity_non_numeric_score_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["high"])))
        .mount(&server)
        .await;

    let err = evaluate_similarity(&client_for(&server), "sim/model", &SIMILARITY_CASES[0])
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Parse { .. }));
    assert_eq!(err.status_code(), Some(200));
}

#[tokio::test]
async fn test_evaluate_answer_correct() {
    let server = MockServer::start().await;
    let case = QA_CASES[0];

    Mock::given(method("POST"))
        .and(path("/models/deepset/roberta-base-squad2"))
        .and(body_json(json!({
            "inputs": {"question": case.question, "context": case.context}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Guido van Rossum",
            "score": 0.95,
            "start": 68,
            "end": 84
        })))
        .mount(&server)
        .await;

    let evaluation = evaluate_answer(&client_for(&server), "deepset/roberta-base-squad2", &case)
        .await
        .expect("qa evaluation");

    assert_eq!(evaluation.model_answer.answer, "Guido van Rossum");
    assert_eq!(evaluation.model_answer.score, 0.95);
    assert_eq!(evaluation.verdict, AnswerVerdict::Correct);
}

#[tokio::test]
async fn test_evaluate_answer_incorrect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"answer": "1991", "score": 0.88})),
        )
        .mount(&server)
        .await;

    let case = QaCase {
        context: "Python was created in 1991.",
        question: "When was Python created?",
        student_answer: "1989",
    };
    let evaluation = evaluate_answer(&client_for(&server), "qa/model", &case)
        .await
        .expect("qa evaluation");

    assert_eq!(evaluation.verdict, AnswerVerdict::Incorrect);
}

#[tokio::test]
async fn test_evaluate_answer_propagates_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = evaluate_answer(&client_for(&server), "qa/model", &QA_CASES[2])
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.diagnostic(), "boom");
}

#[tokio::test]
async fn test_score_relevance_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/cross-encoder/ms-marco-MiniLM-L-6-v2"))
        .and(body_json(json!({
            "inputs": {"text": "What is machine learning?", "text_pair": "Learning from data"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"label": "LABEL_0", "score": 0.97}])),
        )
        .mount(&server)
        .await;

    let case = RelevanceCase {
        query: "What is machine learning?",
        answer: "Learning from data",
    };
    let reply = score_relevance(
        &client_for(&server),
        "cross-encoder/ms-marco-MiniLM-L-6-v2",
        &case,
    )
    .await
    .expect("relevance reply");

    assert_eq!(reply.body, json!([{"label": "LABEL_0", "score": 0.97}]));
}
