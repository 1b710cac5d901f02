use async_graphql::{SimpleObject, Union};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Quiz, QuizQuestion};

/// Question as shown to a student. Carries no correct-answer field at all.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuestionView {
    pub text: String,
    pub options: Vec<String>,
    pub marks: i32,
}

impl From<QuizQuestion> for StudentQuestionView {
    fn from(question: QuizQuestion) -> Self {
        StudentQuestionView {
            text: question.text,
            options: question.options,
            marks: question.marks,
        }
    }
}

/// Student projection of a quiz: no answers, no other students' attempts.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuizView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub questions: Vec<StudentQuestionView>,
    pub total_marks: i32,
    pub duration: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

impl From<Quiz> for StudentQuizView {
    fn from(quiz: Quiz) -> Self {
        StudentQuizView {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            subject_id: quiz.subject_id,
            teacher_id: quiz.teacher_id,
            questions: quiz.questions.into_iter().map(StudentQuestionView::from).collect(),
            total_marks: quiz.total_marks,
            duration: quiz.duration_minutes,
            start_date: quiz.start_date,
            end_date: quiz.end_date,
            is_active: quiz.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub marks: i32,
}

impl From<QuizQuestion> for QuestionView {
    fn from(question: QuizQuestion) -> Self {
        QuestionView {
            text: question.text,
            options: question.options,
            correct_option: question.correct_option,
            marks: question.marks,
        }
    }
}

/// Authoring view for the owning teacher and admins.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub subject_id: String,
    pub teacher_id: String,
    pub questions: Vec<QuestionView>,
    pub total_marks: i32,
    pub duration: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub attempt_count: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> Self {
        QuizView {
            attempt_count: quiz.attempts.len() as i32,
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            subject_id: quiz.subject_id,
            teacher_id: quiz.teacher_id,
            questions: quiz.questions.into_iter().map(QuestionView::from).collect(),
            total_marks: quiz.total_marks,
            duration: quiz.duration_minutes,
            start_date: quiz.start_date,
            end_date: quiz.end_date,
            is_active: quiz.is_active,
            created_at: quiz.created_at,
        }
    }
}

/// Either projection, picked by the caller's role.
#[derive(Debug, Clone, Serialize, Union)]
#[serde(untagged)]
pub enum QuizResponse {
    Full(QuizView),
    Student(StudentQuizView),
}

impl QuizResponse {
    pub fn full(quiz: Quiz) -> Self {
        QuizResponse::Full(quiz.into())
    }

    pub fn student(quiz: Quiz) -> Self {
        QuizResponse::Student(quiz.into())
    }

    pub fn id(&self) -> &str {
        match self {
            QuizResponse::Full(view) => &view.id,
            QuizResponse::Student(view) => &view.id,
        }
    }

    pub fn is_student_view(&self) -> bool {
        matches!(self, QuizResponse::Student(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{NewQuiz, QuizAttempt};
    use chrono::Duration;

    fn quiz() -> Quiz {
        let now = Utc::now();
        let mut quiz = Quiz::new(NewQuiz {
            title: "Sets".to_string(),
            description: None,
            subject_id: "subj-1".to_string(),
            teacher_id: "teacher-1".to_string(),
            questions: vec![
                QuizQuestion::new("Q1", &["a", "b"], 1, 5),
                QuizQuestion::new("Q2", &["a", "b", "c"], 0, 3),
            ],
            duration_minutes: 15,
            start_date: now,
            end_date: now + Duration::hours(1),
        })
        .expect("sample marks fit");
        quiz.attempts.push(QuizAttempt::start("student-1", "Ada", now));
        quiz
    }

    #[test]
    fn student_view_never_serializes_correct_option() {
        let json = serde_json::to_value(QuizResponse::student(quiz())).expect("view should serialize");

        let questions = json["questions"].as_array().expect("questions array");
        assert_eq!(questions.len(), 2);
        for question in questions {
            assert!(question.get("correctOption").is_none());
            assert!(question.get("options").is_some());
        }
        assert!(json.get("attempts").is_none());
        assert!(json.get("attemptCount").is_none());
    }

    #[test]
    fn full_view_keeps_answers_for_authors() {
        let json = serde_json::to_value(QuizResponse::full(quiz())).expect("view should serialize");

        assert_eq!(json["questions"][0]["correctOption"], 1);
        assert_eq!(json["attemptCount"], 1);
        assert_eq!(json["totalMarks"], 8);
        assert_eq!(json["duration"], 15);
    }

    #[test]
    fn response_helpers_report_projection() {
        let response = QuizResponse::student(quiz());
        assert!(response.is_student_view());
        assert!(!response.id().is_empty());
    }
}
