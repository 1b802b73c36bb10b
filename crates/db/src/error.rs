use std::path::PathBuf;

/// Errors raised by the document store adapter.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A MongoDB operation failed.
    #[error("{context}: {source}")]
    Mongo {
        context: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    /// A value could not be converted to BSON.
    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    /// The clothing file could not be read or written.
    #[error("Clothing file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The clothing file holds something other than a JSON array of items.
    #[error("Clothing file {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DbError {
    /// True when MongoDB rejected a write because of a unique index (E11000).
    pub fn is_duplicate_key(&self) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};

        match self {
            DbError::Mongo { source, .. } => matches!(
                source.kind.as_ref(),
                ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == 11000
            ),
            _ => false,
        }
    }
}

/// Attach a short description to a raw driver error.
pub(crate) trait MongoContext<T> {
    fn context(self, context: &'static str) -> Result<T, DbError>;
}

impl<T> MongoContext<T> for Result<T, mongodb::error::Error> {
    fn context(self, context: &'static str) -> Result<T, DbError> {
        self.map_err(|source| DbError::Mongo { context, source })
    }
}
