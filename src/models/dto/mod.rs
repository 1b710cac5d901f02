pub mod quiz_dto;
pub mod request;
pub mod response;

pub use quiz_dto::{QuizResponse, QuizView, StudentQuizView};
pub use request::{AnswerInput, CreateQuizRequest, QuestionInput, SubmitQuizRequest};
pub use response::{QuizResultsResponse, StudentResult, SubmitQuizResponse};
