//! Grading rules applied to model outputs

use std::fmt;

/// Letter-style grade for a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SimilarityGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::Excellent
        } else if score >= 0.6 {
            Self::Good
        } else if score >= 0.4 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for SimilarityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing a student answer with the model's extracted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Incorrect,
}

impl AnswerVerdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for AnswerVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => f.write_str("Correct \u{2713}"),
            Self::Incorrect => f.write_str("Incorrect \u{2717}"),
        }
    }
}

/// Case-insensitive containment in either direction
pub fn judge_answer(student_answer: &str, model_answer: &str) -> AnswerVerdict {
    let student = student_answer.trim().to_lowercase();
    let model = model_answer.trim().to_lowercase();

    // An empty string is contained in everything
    if student.is_empty() || model.is_empty() {
        return AnswerVerdict::Incorrect;
    }

    if model.contains(&student) || student.contains(&model) {
        AnswerVerdict::Correct
    } else {
        AnswerVerdict::Incorrect
    }
}
