use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Quiz, QuizAttempt};

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub score: i32,
    pub total_marks: i32,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct StudentResult {
    pub student_id: String,
    pub student_name: String,
    pub score: i32,
    pub percentage: f64,
    pub submitted_at: DateTime<Utc>,
}

impl StudentResult {
    /// Only completed attempts carry a result.
    pub fn from_attempt(attempt: &QuizAttempt) -> Option<Self> {
        if !attempt.is_completed() {
            return None;
        }
        let submitted_at = attempt.submitted_at?;
        Some(StudentResult {
            student_id: attempt.student_id.clone(),
            student_name: attempt.student_name.clone(),
            score: attempt.score,
            percentage: attempt.percentage,
            submitted_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultsResponse {
    pub quiz_title: String,
    pub total_marks: i32,
    pub total_students: i32,
    pub results: Vec<StudentResult>,
}

impl From<&Quiz> for QuizResultsResponse {
    fn from(quiz: &Quiz) -> Self {
        let results: Vec<StudentResult> = quiz
            .attempts
            .iter()
            .filter_map(StudentResult::from_attempt)
            .collect();

        QuizResultsResponse {
            quiz_title: quiz.title.clone(),
            total_marks: quiz.total_marks,
            total_students: results.len() as i32,
            results,
        }
    }
}
