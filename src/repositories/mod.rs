pub mod quiz_repository;
pub mod subject_repository;

pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use subject_repository::{MongoSubjectRepository, SubjectRepository};

#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
#[cfg(test)]
pub use subject_repository::MockSubjectRepository;
