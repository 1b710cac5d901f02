use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_role, AuthenticatedUser, ANY_ROLE},
    errors::AppError,
    models::{
        domain::{AttemptAnswer, UserRole},
        dto::{CreateQuizRequest, SubmitQuizRequest},
    },
};

#[post("/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, &[UserRole::Teacher])?;

    let quiz = state
        .quiz_service
        .create_quiz(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[get("/quizzes/subject/{subject_id}")]
pub async fn list_quizzes_for_subject(
    state: web::Data<AppState>,
    subject_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, ANY_ROLE)?;

    let quizzes = state
        .quiz_service
        .list_quizzes_for_subject(&auth.0, &subject_id)
        .await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quizzes/student")]
pub async fn list_quizzes_for_student(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, &[UserRole::Student])?;

    let quizzes = state.quiz_service.list_quizzes_for_student(&auth.0).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, ANY_ROLE)?;

    let quiz = state.quiz_service.get_quiz(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes/{id}/start")]
pub async fn start_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, &[UserRole::Student])?;

    let quiz = state.quiz_service.start_quiz(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/quizzes/{id}/submit")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, &[UserRole::Student])?;

    let answers: Vec<AttemptAnswer> = request
        .into_inner()
        .answers
        .into_iter()
        .map(AttemptAnswer::from)
        .collect();
    let result = state.quiz_service.submit_quiz(&auth.0, &id, answers).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/quizzes/{id}/results")]
pub async fn get_quiz_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_role(&auth.0, &[UserRole::Teacher, UserRole::Admin])?;

    let results = state.quiz_service.get_quiz_results(&auth.0, &id).await?;
    Ok(HttpResponse::Ok().json(results))
}
