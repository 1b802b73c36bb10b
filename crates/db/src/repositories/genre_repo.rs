//! Repository for the `Genres` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use mongodb::options::ReturnDocument;

use super::{by_id, collect};
use crate::error::{DbError, MongoContext};
use crate::models::genre::{Genre, UpdateGenre};
use crate::DbPool;

pub struct GenreRepo;

impl GenreRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Genre> {
        pool.collection(Collection::Genres.name())
    }

    pub async fn create(pool: &DbPool, genre: Genre) -> Result<Genre, DbError> {
        Self::collection(pool)
            .insert_one(&genre)
            .await
            .context("Failed to insert genre")?;
        Ok(genre)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Genre>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find genre")
    }

    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Genre>, DbError> {
        Self::collection(pool)
            .find_one(doc! { "name": name })
            .await
            .context("Failed to find genre by name")
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Genre>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list genres")?;
        collect(cursor, "Failed to read genres").await
    }

    /// Returns `None` if no genre with the given `id` exists.
    pub async fn update(pool: &DbPool, id: &str, input: &UpdateGenre) -> Result<Option<Genre>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update genre")
    }
}
