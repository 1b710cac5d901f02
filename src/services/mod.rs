pub mod quiz_attempt_service;
pub mod quiz_service;

pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_service::QuizService;
