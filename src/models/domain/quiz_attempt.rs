use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Completed,
}

impl AttemptStatus {
    /// Name stored in MongoDB, used when filtering on the embedded status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::InProgress => "in_progress",
            AttemptStatus::Completed => "completed",
        }
    }
}

/// One student's engagement with a quiz. Embedded in its parent quiz document.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub student_id: String,
    pub student_name: String,
    pub answers: Vec<AttemptAnswer>,
    pub score: i32,
    pub percentage: f64,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub status: AttemptStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttemptAnswer {
    pub question_index: i32,
    pub selected_option: i32,
}

/// Fields written when an in-progress attempt is submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct AttemptCompletion {
    pub answers: Vec<AttemptAnswer>,
    pub score: i32,
    pub percentage: f64,
    pub submitted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn start(student_id: &str, student_name: &str, started_at: DateTime<Utc>) -> Self {
        QuizAttempt {
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            answers: Vec::new(),
            score: 0,
            percentage: 0.0,
            started_at,
            submitted_at: None,
            status: AttemptStatus::InProgress,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == AttemptStatus::InProgress
    }

    pub fn is_completed(&self) -> bool {
        self.status == AttemptStatus::Completed
    }

    /// Applies a submission. Returns `false` when the attempt was already completed.
    pub fn complete(&mut self, completion: AttemptCompletion) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        self.answers = completion.answers;
        self.score = completion.score;
        self.percentage = completion.percentage;
        self.submitted_at = Some(completion.submitted_at);
        self.status = AttemptStatus::Completed;
        true
    }
}
