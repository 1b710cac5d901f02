use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Subject};

/// Read access to the subject directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>>;
    async fn find_by_cohort(&self, department_id: &str, semester: i32) -> AppResult<Vec<Subject>>;
}

pub struct MongoSubjectRepository {
    collection: Collection<Subject>,
}

impl MongoSubjectRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for subjects collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let cohort_index = IndexModel::builder()
            .keys(doc! { "department_id": 1, "semester": 1 })
            .options(IndexOptions::builder().name("cohort".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(cohort_index).await?;

        log::info!("Successfully created indexes for subjects collection");
        Ok(())
    }
}

#[async_trait]
impl SubjectRepository for MongoSubjectRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>> {
        let subject = self.collection.find_one(doc! { "id": id }).await?;
        Ok(subject)
    }

    async fn find_by_cohort(&self, department_id: &str, semester: i32) -> AppResult<Vec<Subject>> {
        let subjects = self
            .collection
            .find(doc! { "department_id": department_id, "semester": semester })
            .await?
            .try_collect()
            .await?;
        Ok(subjects)
    }
}
