//! Clothing catalogue backends.
//!
//! The clothing catalogue is either a MongoDB collection or a JSON file on
//! disk shaped as `{ "clothes": [ ... ] }`. Both offer create, list and
//! delete.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::DbError;
use crate::models::clothing::Clothing;
use crate::repositories::ClothingRepo;
use crate::DbPool;

/// Where clothing items live.
#[derive(Clone)]
pub enum ClothingBackend {
    Mongo(DbPool),
    JsonFile(JsonClothingStore),
}

impl ClothingBackend {
    pub fn name(&self) -> &'static str {
        match self {
            ClothingBackend::Mongo(_) => "mongo",
            ClothingBackend::JsonFile(_) => "json",
        }
    }

    pub async fn create(&self, item: Clothing) -> Result<Clothing, DbError> {
        match self {
            ClothingBackend::Mongo(pool) => ClothingRepo::create(pool, item).await,
            ClothingBackend::JsonFile(store) => store.create(item).await,
        }
    }

    pub async fn list(&self) -> Result<Vec<Clothing>, DbError> {
        match self {
            ClothingBackend::Mongo(pool) => ClothingRepo::list(pool).await,
            ClothingBackend::JsonFile(store) => store.list().await,
        }
    }

    /// Returns `true` if an item was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        match self {
            ClothingBackend::Mongo(pool) => ClothingRepo::delete(pool, id).await,
            ClothingBackend::JsonFile(store) => store.delete(id).await,
        }
    }
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
struct ClothesFile {
    #[serde(default)]
    clothes: Vec<Clothing>,
}

/// Clothing items kept in a single JSON file.
///
/// Every operation rewrites the whole file; a process-wide lock serializes
/// read-modify-write cycles. A missing file reads as an empty catalogue.
#[derive(Clone)]
pub struct JsonClothingStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonClothingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn list(&self) -> Result<Vec<Clothing>, DbError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.clothes)
    }

    pub async fn create(&self, item: Clothing) -> Result<Clothing, DbError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        file.clothes.push(item.clone());
        self.write(&file).await?;
        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        let _guard = self.lock.lock().await;
        let mut file = self.read().await?;
        let Some(index) = file.clothes.iter().position(|c| c.id == id) else {
            return Ok(false);
        };
        file.clothes.remove(index);
        self.write(&file).await?;
        Ok(true)
    }

    async fn read(&self) -> Result<ClothesFile, DbError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ClothesFile::default()),
            Err(source) => {
                return Err(DbError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| DbError::Json {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, file: &ClothesFile) -> Result<(), DbError> {
        let bytes = serde_json::to_vec_pretty(file).map_err(|source| DbError::Json {
            path: self.path.clone(),
            source,
        })?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|source| DbError::Io {
                path: staging.clone(),
                source,
            })?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|source| DbError::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// Sibling file the catalogue is written to before it replaces `path`.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
