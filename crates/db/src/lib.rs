//! MongoDB document store adapter for the Marquee catalog.

use std::time::Duration;

use bson::{doc, Document};
use marquee_core::catalog::Collection;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, IndexModel};

pub mod clothing_store;
pub mod error;
pub mod models;
pub mod projection_store;
pub mod repositories;

pub use error::DbError;

use error::MongoContext;

/// Handle to the catalog database. Cheap to clone; the driver pools
/// connections internally.
pub type DbPool = mongodb::Database;

const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Build a client for `uri` and return a handle to `db_name`.
///
/// The driver connects lazily, so this succeeds even when the server is
/// down; call [`health_check`] to verify connectivity. A
/// `serverSelectionTimeoutMS` given in the URI wins over the default.
pub async fn create_pool(uri: &str, db_name: &str) -> Result<DbPool, DbError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("Failed to parse MongoDB URI")?;
    if options.server_selection_timeout.is_none() {
        options.server_selection_timeout = Some(DEFAULT_SERVER_SELECTION_TIMEOUT);
    }
    if options.app_name.is_none() {
        options.app_name = Some("marquee".to_string());
    }
    let client = Client::with_options(options).context("Failed to create MongoDB client")?;
    Ok(client.database(db_name))
}

/// Ping the database.
pub async fn health_check(pool: &DbPool) -> Result<(), DbError> {
    pool.run_command(doc! { "ping": 1 })
        .await
        .context("MongoDB ping failed")?;
    Ok(())
}

/// Create the unique `id` index and the lookup indexes on every collection.
pub async fn ensure_indexes(pool: &DbPool) -> Result<(), DbError> {
    for collection in Collection::ALL {
        let models: Vec<IndexModel> = index_keys(collection)
            .into_iter()
            .map(|(keys, unique)| {
                IndexModel::builder()
                    .keys(keys)
                    .options(unique.then(|| IndexOptions::builder().unique(true).build()))
                    .build()
            })
            .collect();
        pool.collection::<Document>(collection.name())
            .create_indexes(models)
            .await
            .context("Failed to create indexes")?;
        tracing::debug!(%collection, "Indexes ensured");
    }
    Ok(())
}

/// Index keys per collection, paired with whether the index is unique.
///
/// Every collection is keyed by a unique `id`. Parents get a multikey index
/// on each embedded array's `id` so propagation writes do not scan.
pub fn index_keys(collection: Collection) -> Vec<(Document, bool)> {
    let mut keys = vec![(doc! { "id": 1 }, true)];
    for field in collection.embedding_fields() {
        let mut key = Document::new();
        key.insert(format!("{}.id", field.name()), 1);
        keys.push((key, false));
    }
    match collection {
        Collection::Seasons => keys.push((doc! { "showId": 1 }, false)),
        Collection::Episodes => keys.push((doc! { "seasonId": 1 }, false)),
        Collection::Articles => {
            keys.push((doc! { "releaseDate": -1 }, false));
            keys.push((doc! { "journalist.id": 1 }, false));
        }
        Collection::Celebrities | Collection::Genres | Collection::Journalists => {
            keys.push((doc! { "name": 1 }, false));
        }
        Collection::Shows => keys.push((doc! { "title": 1 }, false)),
        Collection::Clothing => {}
    }
    keys
}
