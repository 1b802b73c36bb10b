//! Repository for the `Journalists` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use mongodb::options::ReturnDocument;

use super::{by_id, collect};
use crate::error::{DbError, MongoContext};
use crate::models::journalist::{Journalist, UpdateJournalist};
use crate::DbPool;

pub struct JournalistRepo;

impl JournalistRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Journalist> {
        pool.collection(Collection::Journalists.name())
    }

    pub async fn create(pool: &DbPool, journalist: Journalist) -> Result<Journalist, DbError> {
        Self::collection(pool)
            .insert_one(&journalist)
            .await
            .context("Failed to insert journalist")?;
        Ok(journalist)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Journalist>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find journalist")
    }

    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Journalist>, DbError> {
        Self::collection(pool)
            .find_one(doc! { "name": name })
            .await
            .context("Failed to find journalist by name")
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Journalist>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list journalists")?;
        collect(cursor, "Failed to read journalists").await
    }

    /// Returns `None` if no journalist with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateJournalist,
    ) -> Result<Option<Journalist>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update journalist")
    }
}
