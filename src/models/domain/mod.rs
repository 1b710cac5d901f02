pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod subject;
pub mod user;
pub use quiz::{NewQuiz, Quiz};
pub use quiz_attempt::{AttemptAnswer, AttemptCompletion, AttemptStatus, QuizAttempt};
pub use quiz_question::QuizQuestion;
pub use subject::Subject;
pub use user::UserRole;
