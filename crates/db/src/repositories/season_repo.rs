//! Repository for the `Seasons` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use marquee_core::projection::ShortEpisode;
use mongodb::options::ReturnDocument;

use super::{by_id, collect, pull_poster, push_posters};
use crate::error::{DbError, MongoContext};
use crate::models::season::{Season, UpdateSeason};
use crate::DbPool;

/// Provides CRUD and poster operations for seasons.
pub struct SeasonRepo;

impl SeasonRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Season> {
        pool.collection(Collection::Seasons.name())
    }

    pub async fn create(pool: &DbPool, season: Season) -> Result<Season, DbError> {
        Self::collection(pool)
            .insert_one(&season)
            .await
            .context("Failed to insert season")?;
        Ok(season)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Season>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find season")
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Season>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list seasons")?;
        collect(cursor, "Failed to read seasons").await
    }

    /// Seasons belonging to one show.
    pub async fn list_by_show(pool: &DbPool, show_id: &str) -> Result<Vec<Season>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! { "showId": show_id })
            .await
            .context("Failed to list seasons by show")?;
        collect(cursor, "Failed to read seasons").await
    }

    /// Apply the present fields of `input`.
    ///
    /// Returns `None` if no season with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateSeason,
    ) -> Result<Option<Season>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update season")
    }

    /// Append an episode projection to the season. Returns `false` if the
    /// season does not exist.
    pub async fn add_episode(
        pool: &DbPool,
        season_id: &str,
        episode: &ShortEpisode,
    ) -> Result<bool, DbError> {
        let episode = bson::to_bson(episode)?;
        let result = Self::collection(pool)
            .update_one(by_id(season_id), doc! { "$push": { "episodes": episode } })
            .await
            .context("Failed to add episode to season")?;
        Ok(result.matched_count > 0)
    }

    pub async fn push_posters(
        pool: &DbPool,
        id: &str,
        paths: &[String],
    ) -> Result<Option<Season>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), push_posters(paths))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to upload season posters")
    }

    pub async fn pull_poster(pool: &DbPool, id: &str, path: &str) -> Result<Option<Season>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), pull_poster(path))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to delete season poster")
    }
}
