use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{AttemptCompletion, AttemptStatus, Quiz, QuizAttempt},
};

/// Storage for quiz aggregates.
///
/// Attempts are only ever changed through [`push_attempt_if_absent`] and
/// [`complete_attempt`]; implementations must apply each as a single atomic
/// conditional update on the quiz document.
///
/// [`push_attempt_if_absent`]: QuizRepository::push_attempt_if_absent
/// [`complete_attempt`]: QuizRepository::complete_attempt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_by_subject(&self, subject_id: &str) -> AppResult<Vec<Quiz>>;
    async fn find_active_by_subjects(&self, subject_ids: &[String]) -> AppResult<Vec<Quiz>>;

    /// Appends `attempt` unless the quiz already holds one for the same student.
    /// Returns `false` when nothing was appended.
    async fn push_attempt_if_absent(&self, quiz_id: &str, attempt: QuizAttempt)
        -> AppResult<bool>;

    /// Completes the student's in-progress attempt. Returns `false` when no
    /// in-progress attempt matched.
    async fn complete_attempt(
        &self,
        quiz_id: &str,
        student_id: &str,
        completion: AttemptCompletion,
    ) -> AppResult<bool>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let subject_index = IndexModel::builder()
            .keys(doc! { "subject_id": 1, "end_date": 1 })
            .options(
                IndexOptions::builder()
                    .name("subject_end_date".to_string())
                    .build(),
            )
            .build();

        let attempt_student_index = IndexModel::builder()
            .keys(doc! { "attempts.student_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("attempt_student".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(subject_index).await?;
        self.collection.create_index(attempt_student_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_by_subject(&self, subject_id: &str) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(doc! { "subject_id": subject_id })
            .sort(doc! { "start_date": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn find_active_by_subjects(&self, subject_ids: &[String]) -> AppResult<Vec<Quiz>> {
        if subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let quizzes = self
            .collection
            .find(doc! {
                "subject_id": { "$in": subject_ids.to_vec() },
                "is_active": true,
            })
            .sort(doc! { "start_date": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn push_attempt_if_absent(
        &self,
        quiz_id: &str,
        attempt: QuizAttempt,
    ) -> AppResult<bool> {
        let filter = doc! {
            "id": quiz_id,
            "attempts.student_id": { "$ne": &attempt.student_id },
        };
        let update = doc! {
            "$push": { "attempts": to_bson(&attempt)? },
            "$set": { "modified_at": to_bson(&Utc::now())? },
        };

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.modified_count == 1)
    }

    async fn complete_attempt(
        &self,
        quiz_id: &str,
        student_id: &str,
        completion: AttemptCompletion,
    ) -> AppResult<bool> {
        let filter = doc! {
            "id": quiz_id,
            "attempts": {
                "$elemMatch": {
                    "student_id": student_id,
                    "status": AttemptStatus::InProgress.as_str(),
                }
            },
        };
        let update = doc! {
            "$set": {
                "attempts.$.answers": to_bson(&completion.answers)?,
                "attempts.$.score": completion.score,
                "attempts.$.percentage": completion.percentage,
                "attempts.$.submitted_at": to_bson(&completion.submitted_at)?,
                "attempts.$.status": AttemptStatus::Completed.as_str(),
                "modified_at": to_bson(&Utc::now())?,
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.modified_count == 1)
    }
}
