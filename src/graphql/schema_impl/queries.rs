use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    auth::ANY_ROLE,
    graphql::helpers::authorize,
    models::{
        domain::UserRole,
        dto::{QuizResponse, QuizResultsResponse, StudentQuizView},
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Non-expired quizzes of a subject, projected for the caller's role.
    async fn quizzes_for_subject(
        &self,
        ctx: &Context<'_>,
        subject_id: ID,
    ) -> Result<Vec<QuizResponse>> {
        let (state, claims) = authorize(ctx, ANY_ROLE).map_err(|e| e.extend())?;

        state
            .quiz_service
            .list_quizzes_for_subject(&claims, subject_id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    async fn quizzes_for_student(&self, ctx: &Context<'_>) -> Result<Vec<StudentQuizView>> {
        let (state, claims) = authorize(ctx, &[UserRole::Student]).map_err(|e| e.extend())?;

        state
            .quiz_service
            .list_quizzes_for_student(&claims)
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> Result<QuizResponse> {
        let (state, claims) = authorize(ctx, ANY_ROLE).map_err(|e| e.extend())?;

        state
            .quiz_service
            .get_quiz(&claims, id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    async fn quiz_results(&self, ctx: &Context<'_>, id: ID) -> Result<QuizResultsResponse> {
        let (state, claims) =
            authorize(ctx, &[UserRole::Teacher, UserRole::Admin]).map_err(|e| e.extend())?;

        state
            .quiz_service
            .get_quiz_results(&claims, id.as_str())
            .await
            .map_err(|e| e.extend())
    }
}
