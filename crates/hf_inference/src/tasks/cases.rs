//! Fixed smoke-test models and cases

/// Question-generation models, tried in order until one answers
pub const QUESTION_GENERATION_MODELS: &[&str] = &[
    "valhalla/t5-base-qg-hl",
    "mrm8488/t5-base-finetuned-question-generation-ap",
    "iarfmoose/t5-base-question-generator",
];

pub const SIMILARITY_MODEL: &str = "sentence-transformers/all-MiniLM-L6-v2";

pub const QUESTION_ANSWERING_MODEL: &str = "deepset/roberta-base-squad2";

pub const CROSS_ENCODER_MODEL: &str = "cross-encoder/ms-marco-MiniLM-L-6-v2";

pub const QUESTION_GENERATION_CONTEXT: &str = "
    Python is a high-level, interpreted programming language.
    It was created by Guido van Rossum and first released in 1991.
    Python emphasizes code readability and uses significant indentation.
    It supports multiple programming paradigms including procedural, object-oriented, and functional programming.
    ";

/// Reference answer compared against a student answer by embedding similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityCase {
    pub question: &'static str,
    pub reference_answer: &'static str,
    pub student_answer: &'static str,
}

/// Student answer checked against what a QA model extracts from the context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaCase {
    pub context: &'static str,
    pub question: &'static str,
    pub student_answer: &'static str,
}

/// Query/answer pair scored by a cross-encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelevanceCase {
    pub query: &'static str,
    pub answer: &'static str,
}

pub const SIMILARITY_CASES: &[SimilarityCase] = &[
    SimilarityCase {
        question: "What is Python?",
        reference_answer: "Python is a high-level programming language",
        student_answer: "Python is a programming language used for coding",
    },
    SimilarityCase {
        question: "Who created Python?",
        reference_answer: "Guido van Rossum",
        student_answer: "It was created by Guido",
    },
    SimilarityCase {
        question: "When was Python released?",
        reference_answer: "1991",
        student_answer: "In the early 1990s",
    },
];

const PYTHON_ORIGIN: &str = "Python is a high-level, interpreted programming language created by Guido van Rossum in 1991.";

pub const QA_CASES: &[QaCase] = &[
    QaCase {
        context: PYTHON_ORIGIN,
        question: "Who created Python?",
        student_answer: "Guido van Rossum",
    },
    QaCase {
        context: PYTHON_ORIGIN,
        question: "When was Python created?",
        student_answer: "1991",
    },
    QaCase {
        context: "Python emphasizes code readability and uses significant indentation. It supports multiple programming paradigms.",
        question: "What does Python emphasize?",
        student_answer: "Code readability",
    },
];

pub const RELEVANCE_CASES: &[RelevanceCase] = &[
    RelevanceCase {
        query: "What is machine learning?",
        answer: "Machine learning is a subset of AI that enables systems to learn from data",
    },
    RelevanceCase {
        query: "What is machine learning?",
        answer: "It's about computers and stuff",
    },
];
