//! Repository for the `Celebrities` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use mongodb::options::ReturnDocument;

use super::{by_id, collect, pull_poster, push_posters};
use crate::error::{DbError, MongoContext};
use crate::models::celebrity::{Celebrity, UpdateCelebrity};
use crate::DbPool;

/// Provides CRUD and poster operations for celebrities.
pub struct CelebrityRepo;

impl CelebrityRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Celebrity> {
        pool.collection(Collection::Celebrities.name())
    }

    /// Insert a new celebrity, returning it unchanged.
    pub async fn create(pool: &DbPool, celebrity: Celebrity) -> Result<Celebrity, DbError> {
        Self::collection(pool)
            .insert_one(&celebrity)
            .await
            .context("Failed to insert celebrity")?;
        Ok(celebrity)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Celebrity>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find celebrity")
    }

    /// All celebrities sharing `name`. Used for the uniqueness check.
    pub async fn list_by_name(pool: &DbPool, name: &str) -> Result<Vec<Celebrity>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! { "name": name })
            .await
            .context("Failed to list celebrities by name")?;
        collect(cursor, "Failed to read celebrities").await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Celebrity>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list celebrities")?;
        collect(cursor, "Failed to read celebrities").await
    }

    /// Apply the present fields of `input`.
    ///
    /// Returns `None` if no celebrity with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateCelebrity,
    ) -> Result<Option<Celebrity>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update celebrity")
    }

    /// Append poster paths, returning the updated celebrity.
    pub async fn push_posters(
        pool: &DbPool,
        id: &str,
        paths: &[String],
    ) -> Result<Option<Celebrity>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), push_posters(paths))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to upload celebrity posters")
    }

    /// Remove one poster path, returning the updated celebrity.
    pub async fn pull_poster(
        pool: &DbPool,
        id: &str,
        path: &str,
    ) -> Result<Option<Celebrity>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), pull_poster(path))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to delete celebrity poster")
    }
}
