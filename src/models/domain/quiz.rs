use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{quiz_attempt::QuizAttempt, quiz_question::QuizQuestion},
};

/// Aggregate root for a timed quiz and the attempts made against it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub questions: Vec<QuizQuestion>,
    pub total_marks: i32, // sum of question marks, fixed at creation
    pub duration_minutes: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub attempts: Vec<QuizAttempt>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

pub struct NewQuiz {
    pub title: String,
    pub description: Option<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub questions: Vec<QuizQuestion>,
    pub duration_minutes: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Quiz {
    /// Fails with `ValidationError` when the marks do not add up within `i32`.
    pub fn new(new_quiz: NewQuiz) -> AppResult<Self> {
        let now = Utc::now();
        let total_marks = Self::sum_marks(&new_quiz.questions).ok_or_else(|| {
            AppError::ValidationError("Total marks exceed the supported maximum".to_string())
        })?;

        Ok(Quiz {
            id: Uuid::new_v4().to_string(),
            title: new_quiz.title,
            description: new_quiz.description,
            subject_id: new_quiz.subject_id,
            teacher_id: new_quiz.teacher_id,
            questions: new_quiz.questions,
            total_marks,
            duration_minutes: new_quiz.duration_minutes,
            start_date: new_quiz.start_date,
            end_date: new_quiz.end_date,
            attempts: Vec::new(),
            is_active: true,
            created_at: Some(now),
            modified_at: Some(now),
        })
    }

    /// `None` on overflow.
    pub fn sum_marks(questions: &[QuizQuestion]) -> Option<i32> {
        questions
            .iter()
            .try_fold(0i32, |total, q| total.checked_add(q.marks))
    }

    /// Inclusive on both ends of the availability window.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }

    pub fn attempt_for(&self, student_id: &str) -> Option<&QuizAttempt> {
        self.attempts.iter().find(|a| a.student_id == student_id)
    }

    pub fn completed_attempts(&self) -> impl Iterator<Item = &QuizAttempt> {
        self.attempts.iter().filter(|a| a.is_completed())
    }
}
