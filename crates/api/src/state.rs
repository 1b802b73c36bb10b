use std::sync::Arc;

use marquee_db::clothing_store::ClothingBackend;
use marquee_db::projection_store::MongoProjectionStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Catalog database handle.
    pub pool: marquee_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Store the projection propagator writes through.
    pub projections: MongoProjectionStore,
    /// Backend serving `/clothing`.
    pub clothing: ClothingBackend,
}

impl AppState {
    pub fn new(pool: marquee_db::DbPool, config: ServerConfig, clothing: ClothingBackend) -> Self {
        Self {
            projections: MongoProjectionStore::new(pool.clone()),
            pool,
            config: Arc::new(config),
            clothing,
        }
    }
}
