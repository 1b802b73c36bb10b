//! Repository for the `Episodes` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use mongodb::options::ReturnDocument;

use super::{by_id, collect, pull_poster, push_posters};
use crate::error::{DbError, MongoContext};
use crate::models::episode::{Episode, UpdateEpisode};
use crate::DbPool;

/// Provides CRUD and poster operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Episode> {
        pool.collection(Collection::Episodes.name())
    }

    pub async fn create(pool: &DbPool, episode: Episode) -> Result<Episode, DbError> {
        Self::collection(pool)
            .insert_one(&episode)
            .await
            .context("Failed to insert episode")?;
        Ok(episode)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Episode>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find episode")
    }

    pub async fn list(pool: &DbPool) -> Result<Vec<Episode>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! {})
            .await
            .context("Failed to list episodes")?;
        collect(cursor, "Failed to read episodes").await
    }

    /// Episodes belonging to one season.
    pub async fn list_by_season(pool: &DbPool, season_id: &str) -> Result<Vec<Episode>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! { "seasonId": season_id })
            .await
            .context("Failed to list episodes by season")?;
        collect(cursor, "Failed to read episodes").await
    }

    /// Apply the present fields of `input`.
    ///
    /// Returns `None` if no episode with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update episode")
    }

    pub async fn push_posters(
        pool: &DbPool,
        id: &str,
        paths: &[String],
    ) -> Result<Option<Episode>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), push_posters(paths))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to upload episode posters")
    }

    pub async fn pull_poster(pool: &DbPool, id: &str, path: &str) -> Result<Option<Episode>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), pull_poster(path))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to delete episode poster")
    }
}
