pub mod mutations;
pub mod queries;

use async_graphql::{EmptySubscription, Schema as GraphQLSchema};

use crate::app_state::AppState;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_graphql::Request;

    use super::*;
    use crate::{
        config::Config,
        models::domain::UserRole,
        repositories::{MockQuizRepository, MockSubjectRepository},
        services::QuizService,
        test_utils::fixtures::{claims_for, sample_quiz},
    };

    fn schema_with(quizzes: MockQuizRepository) -> Schema {
        let service = QuizService::new(Arc::new(quizzes), Arc::new(MockSubjectRepository::new()));
        create_schema(AppState::with_service(Arc::new(service), Config::test_config()))
    }

    #[tokio::test]
    async fn test_quiz_results_forbidden_for_student() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_by_id().never();
        let schema = schema_with(quizzes);

        let request = Request::new(r#"{ quizResults(id: "quiz-1") { totalStudents } }"#)
            .data(claims_for("student-1", UserRole::Student));
        let response = schema.execute(request).await;

        assert_eq!(response.errors.len(), 1);
        let extensions = serde_json::to_value(&response.errors[0].extensions).unwrap();
        assert_eq!(extensions["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_missing_claims_is_unauthorized() {
        let schema = schema_with(MockQuizRepository::new());

        let response = schema
            .execute(r#"{ quiz(id: "quiz-1") { __typename } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let extensions = serde_json::to_value(&response.errors[0].extensions).unwrap();
        assert_eq!(extensions["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_start_quiz_payload_has_no_correct_option() {
        let schema = schema_with(MockQuizRepository::new());

        let request = Request::new(
            r#"mutation { startQuiz(id: "quiz-1") { questions { correctOption } } }"#,
        )
        .data(claims_for("student-1", UserRole::Student));
        let response = schema.execute(request).await;

        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_start_quiz_returns_student_projection() {
        let quiz = sample_quiz("teacher-1");
        let quiz_id = quiz.id.clone();
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .returning(move |_| Ok(Some(quiz.clone())));
        quizzes
            .expect_push_attempt_if_absent()
            .times(1)
            .returning(|_, _| Ok(true));
        let schema = schema_with(quizzes);

        let query = format!(
            r#"mutation {{ startQuiz(id: "{}") {{ id totalMarks questions {{ text marks }} }} }}"#,
            quiz_id
        );
        let request = Request::new(query).data(claims_for("student-1", UserRole::Student));
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["startQuiz"]["id"], quiz_id.as_str());
        assert_eq!(data["startQuiz"]["totalMarks"], 8);
        assert_eq!(data["startQuiz"]["questions"][0]["marks"], 5);
    }

    #[tokio::test]
    async fn test_submit_quiz_without_attempt_reports_code() {
        let quiz = sample_quiz("teacher-1");
        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .returning(move |_| Ok(Some(quiz.clone())));
        quizzes.expect_complete_attempt().never();
        let schema = schema_with(quizzes);

        let request = Request::new(
            r#"mutation { submitQuiz(id: "quiz-1", answers: [{ questionIndex: 0, selectedOption: 1 }]) { score } }"#,
        )
        .data(claims_for("student-1", UserRole::Student));
        let response = schema.execute(request).await;

        assert_eq!(response.errors.len(), 1);
        let extensions = serde_json::to_value(&response.errors[0].extensions).unwrap();
        assert_eq!(extensions["code"], "NO_ACTIVE_ATTEMPT");
    }
}
