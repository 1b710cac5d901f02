use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoSubjectRepository},
    services::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let subject_repository =
            Arc::new(MongoSubjectRepository::new(&db, &config.subjects_collection));
        subject_repository.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(quiz_repository, subject_repository));

        Ok(Self {
            quiz_service,
            config: Arc::new(config),
            db: Some(db),
        })
    }

    /// State over already-built services, without a database handle.
    pub fn with_service(quiz_service: Arc<QuizService>, config: Config) -> Self {
        Self {
            quiz_service,
            config: Arc::new(config),
            db: None,
        }
    }
}
