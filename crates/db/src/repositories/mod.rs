//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod article_repo;
pub mod celebrity_repo;
pub mod clothing_repo;
pub mod episode_repo;
pub mod genre_repo;
pub mod journalist_repo;
pub mod season_repo;
pub mod show_repo;

pub use article_repo::ArticleRepo;
pub use celebrity_repo::CelebrityRepo;
pub use clothing_repo::ClothingRepo;
pub use episode_repo::EpisodeRepo;
pub use genre_repo::GenreRepo;
pub use journalist_repo::JournalistRepo;
pub use season_repo::SeasonRepo;
pub use show_repo::ShowRepo;

use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::Cursor;
use serde::de::DeserializeOwned;

use crate::error::{DbError, MongoContext};

/// Filter on the public `id` key (not Mongo's `_id`).
pub(crate) fn by_id(id: &str) -> Document {
    doc! { "id": id }
}

/// Append poster paths to the canonical `postersPath` list, skipping paths
/// already present.
pub(crate) fn push_posters(paths: &[String]) -> Document {
    doc! { "$addToSet": { "postersPath": { "$each": paths.to_vec() } } }
}

/// Remove one exact path from the canonical `postersPath` list.
pub(crate) fn pull_poster(path: &str) -> Document {
    doc! { "$pull": { "postersPath": path } }
}

/// Drain a cursor into a `Vec`.
pub(crate) async fn collect<T>(cursor: Cursor<T>, context: &'static str) -> Result<Vec<T>, DbError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    cursor.try_collect().await.context(context)
}
