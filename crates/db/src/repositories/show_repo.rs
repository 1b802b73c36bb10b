//! Repository for the `Shows` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use marquee_core::projection::ShortSeason;
use mongodb::options::ReturnDocument;

use super::{by_id, collect, pull_poster, push_posters};
use crate::error::{DbError, MongoContext};
use crate::models::show::{Show, UpdateShow};
use crate::DbPool;

/// Provides CRUD and poster operations for shows.
///
/// Series and movie posters share the `postersPath` list; only the path
/// prefix differs.
pub struct ShowRepo;

impl ShowRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Show> {
        pool.collection(Collection::Shows.name())
    }

    pub async fn create(pool: &DbPool, show: Show) -> Result<Show, DbError> {
        Self::collection(pool)
            .insert_one(&show)
            .await
            .context("Failed to insert show")?;
        Ok(show)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Show>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find show")
    }

    /// All shows sharing `title`. Used for the uniqueness check.
    pub async fn list_by_title(pool: &DbPool, title: &str) -> Result<Vec<Show>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! { "title": title })
            .await
            .context("Failed to list shows by title")?;
        collect(cursor, "Failed to read shows").await
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Show>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list shows")?;
        collect(cursor, "Failed to read shows").await
    }

    /// Apply the present fields of `input`.
    ///
    /// Returns `None` if no show with the given `id` exists.
    pub async fn update(pool: &DbPool, id: &str, input: &UpdateShow) -> Result<Option<Show>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update show")
    }

    /// Append a season projection to the show. Returns `false` if the show
    /// does not exist.
    pub async fn add_season(pool: &DbPool, show_id: &str, season: &ShortSeason) -> Result<bool, DbError> {
        let season = bson::to_bson(season)?;
        let result = Self::collection(pool)
            .update_one(by_id(show_id), doc! { "$push": { "seasons": season } })
            .await
            .context("Failed to add season to show")?;
        Ok(result.matched_count > 0)
    }

    pub async fn push_posters(pool: &DbPool, id: &str, paths: &[String]) -> Result<Option<Show>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), push_posters(paths))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to upload show posters")
    }

    pub async fn pull_poster(pool: &DbPool, id: &str, path: &str) -> Result<Option<Show>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), pull_poster(path))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to delete show poster")
    }
}
