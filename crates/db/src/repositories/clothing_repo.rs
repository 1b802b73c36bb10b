//! Repository for the `Clothing` collection.

use bson::doc;
use marquee_core::catalog::Collection;

use super::{by_id, collect};
use crate::error::{DbError, MongoContext};
use crate::models::clothing::Clothing;
use crate::DbPool;

pub struct ClothingRepo;

impl ClothingRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Clothing> {
        pool.collection(Collection::Clothing.name())
    }

    pub async fn create(pool: &DbPool, item: Clothing) -> Result<Clothing, DbError> {
        Self::collection(pool)
            .insert_one(&item)
            .await
            .context("Failed to insert clothing item")?;
        Ok(item)
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Clothing>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list clothing")?;
        collect(cursor, "Failed to read clothing").await
    }

    /// Returns `true` if an item was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, DbError> {
        let result = Self::collection(pool)
            .delete_one(by_id(id))
            .await
            .context("Failed to delete clothing item")?;
        Ok(result.deleted_count > 0)
    }
}
