pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::{auth::AuthMiddleware, graphql};

pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::{
    create_quiz, get_quiz, get_quiz_results, list_quizzes_for_student, list_quizzes_for_subject,
    start_quiz, submit_quiz,
};

/// Public health probes.
pub fn configure_health(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(health_check_ready);
}

/// Authenticated `/api` scope. `/quizzes/student` is registered ahead of
/// `/quizzes/{id}` so it is not captured as an id.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(AuthMiddleware)
            .service(create_quiz)
            .service(list_quizzes_for_student)
            .service(list_quizzes_for_subject)
            .service(start_quiz)
            .service(submit_quiz)
            .service(get_quiz_results)
            .service(get_quiz)
            .service(graphql::graphql_handler),
    );
}
