use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    graphql::helpers::authorize,
    models::{
        domain::{AttemptAnswer, UserRole},
        dto::{AnswerInput, CreateQuizRequest, QuizView, StudentQuizView, SubmitQuizResponse},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_quiz(&self, ctx: &Context<'_>, input: CreateQuizRequest) -> Result<QuizView> {
        let (state, claims) = authorize(ctx, &[UserRole::Teacher]).map_err(|e| e.extend())?;

        state
            .quiz_service
            .create_quiz(&claims, input)
            .await
            .map_err(|e| e.extend())
    }

    async fn start_quiz(&self, ctx: &Context<'_>, id: ID) -> Result<StudentQuizView> {
        let (state, claims) = authorize(ctx, &[UserRole::Student]).map_err(|e| e.extend())?;

        state
            .quiz_service
            .start_quiz(&claims, id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    async fn submit_quiz(
        &self,
        ctx: &Context<'_>,
        id: ID,
        answers: Vec<AnswerInput>,
    ) -> Result<SubmitQuizResponse> {
        let (state, claims) = authorize(ctx, &[UserRole::Student]).map_err(|e| e.extend())?;

        let answers = answers.into_iter().map(AttemptAnswer::from).collect();
        state
            .quiz_service
            .submit_quiz(&claims, id.as_str(), answers)
            .await
            .map_err(|e| e.extend())
    }
}
