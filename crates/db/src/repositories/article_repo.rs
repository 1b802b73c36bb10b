//! Repository for the `Articles` collection.

use bson::doc;
use marquee_core::catalog::Collection;
use mongodb::options::{FindOptions, ReturnDocument};

use super::{by_id, collect, pull_poster, push_posters};
use crate::error::{DbError, MongoContext};
use crate::models::article::{Article, UpdateArticle};
use crate::DbPool;

/// Provides CRUD and poster operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    fn collection(pool: &DbPool) -> mongodb::Collection<Article> {
        pool.collection(Collection::Articles.name())
    }

    pub async fn create(pool: &DbPool, article: Article) -> Result<Article, DbError> {
        Self::collection(pool)
            .insert_one(&article)
            .await
            .context("Failed to insert article")?;
        Ok(article)
    }

    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<Article>, DbError> {
        Self::collection(pool)
            .find_one(by_id(id))
            .await
            .context("Failed to find article")
    }

    /// Newest articles first. `limit` of `None` or `0` returns everything.
    pub async fn list(pool: &DbPool, limit: Option<i64>) -> Result<Vec<Article>, DbError> {
        let collection = Self::collection(pool);
        let cursor = collection
            .find(doc! {})
            .with_options(list_options(limit))
            .await
            .context("Failed to list articles")?;
        collect(cursor, "Failed to read articles").await
    }

    /// Articles written by one journalist, newest first.
    pub async fn list_by_journalist(
        pool: &DbPool,
        journalist_id: &str,
    ) -> Result<Vec<Article>, DbError> {
        let cursor = Self::collection(pool)
            .find(doc! { "journalist.id": journalist_id })
            .sort(doc! { "releaseDate": -1 })
            .await
            .context("Failed to list articles by journalist")?;
        collect(cursor, "Failed to read articles").await
    }

    /// Returns `None` if no article with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, DbError> {
        let set = input.to_set_document()?;
        if set.is_empty() {
            return Self::find_by_id(pool, id).await;
        }
        Self::collection(pool)
            .find_one_and_update(by_id(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to update article")
    }

    pub async fn push_posters(
        pool: &DbPool,
        id: &str,
        paths: &[String],
    ) -> Result<Option<Article>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), push_posters(paths))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to upload article posters")
    }

    pub async fn pull_poster(pool: &DbPool, id: &str, path: &str) -> Result<Option<Article>, DbError> {
        Self::collection(pool)
            .find_one_and_update(by_id(id), pull_poster(path))
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to delete article poster")
    }
}

/// Find options for [`ArticleRepo::list`]: newest first, capped at a
/// positive `limit`.
fn list_options(limit: Option<i64>) -> FindOptions {
    let mut options = FindOptions::default();
    options.sort = Some(doc! { "releaseDate": -1 });
    options.limit = limit.filter(|&n| n > 0);
    options
}
