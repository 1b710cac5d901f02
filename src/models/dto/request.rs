use async_graphql::InputObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AttemptAnswer, QuizQuestion};

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub subject_id: String,

    #[validate(length(min = 1, message = "A quiz needs at least one question"), nested)]
    pub questions: Vec<QuestionInput>,

    /// Minutes a student is expected to spend once started.
    #[validate(range(min = 1, message = "Duration must be at least one minute"))]
    pub duration: i32,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    #[validate(length(min = 1))]
    pub text: String,

    #[validate(length(min = 1, message = "A question needs at least one option"))]
    pub options: Vec<String>,

    pub correct_option: i32,

    #[validate(range(min = 1, max = 1000, message = "Marks must be between 1 and 1000"))]
    pub marks: i32,
}

impl From<QuestionInput> for QuizQuestion {
    fn from(input: QuestionInput) -> Self {
        QuizQuestion {
            text: input.text,
            options: input.options,
            correct_option: input.correct_option,
            marks: input.marks,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

#[derive(Debug, Clone, Copy, Deserialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub question_index: i32,
    pub selected_option: i32,
}

impl From<AnswerInput> for AttemptAnswer {
    fn from(input: AnswerInput) -> Self {
        AttemptAnswer {
            question_index: input.question_index,
            selected_option: input.selected_option,
        }
    }
}
