use serde::{Deserialize, Serialize};

/// A single-choice question as authored by the teacher.
///
/// `correct_option` is authoring data; student-facing views are built from
/// [`crate::models::dto::quiz_dto::StudentQuestionView`], which has no such field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub marks: i32,
}

impl QuizQuestion {
    pub fn new(text: &str, options: &[&str], correct_option: i32, marks: i32) -> Self {
        QuizQuestion {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option,
            marks,
        }
    }

    pub fn has_valid_correct_option(&self) -> bool {
        self.correct_option >= 0 && (self.correct_option as usize) < self.options.len()
    }

    pub fn is_answered_by(&self, selected_option: i32) -> bool {
        self.correct_option == selected_option
    }
}
