//! Catalog collections and the embedded arrays that hold short projections.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// One logical document collection per catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Collection {
    Shows,
    Seasons,
    Episodes,
    Celebrities,
    Genres,
    Articles,
    Journalists,
    Clothing,
}

impl Collection {
    /// Every collection, in index-creation order.
    pub const ALL: [Collection; 8] = [
        Collection::Shows,
        Collection::Seasons,
        Collection::Episodes,
        Collection::Celebrities,
        Collection::Genres,
        Collection::Articles,
        Collection::Journalists,
        Collection::Clothing,
    ];

    /// The collection name in the document database.
    pub const fn name(self) -> &'static str {
        match self {
            Collection::Shows => "Shows",
            Collection::Seasons => "Seasons",
            Collection::Episodes => "Episodes",
            Collection::Celebrities => "Celebrities",
            Collection::Genres => "Genres",
            Collection::Articles => "Articles",
            Collection::Journalists => "Journalists",
            Collection::Clothing => "Clothing",
        }
    }

    /// Embedded arrays documents in this collection may carry.
    pub const fn embedding_fields(self) -> &'static [EmbeddingField] {
        match self {
            Collection::Shows => &[
                EmbeddingField::Starring,
                EmbeddingField::WrittenBy,
                EmbeddingField::DirectedBy,
                EmbeddingField::ProducedBy,
                EmbeddingField::Seasons,
            ],
            Collection::Seasons => &[
                EmbeddingField::Starring,
                EmbeddingField::WrittenBy,
                EmbeddingField::DirectedBy,
                EmbeddingField::ProducedBy,
                EmbeddingField::Episodes,
            ],
            Collection::Episodes => &[
                EmbeddingField::Starring,
                EmbeddingField::WrittenBy,
                EmbeddingField::DirectedBy,
                EmbeddingField::ProducedBy,
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Embedding fields
// ---------------------------------------------------------------------------

/// An array field inside a parent document that embeds short projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EmbeddingField {
    Starring,
    WrittenBy,
    DirectedBy,
    ProducedBy,
    Seasons,
    Episodes,
}

impl EmbeddingField {
    /// The array's field name in stored documents.
    pub const fn name(self) -> &'static str {
        match self {
            EmbeddingField::Starring => "starring",
            EmbeddingField::WrittenBy => "writtenBy",
            EmbeddingField::DirectedBy => "directedBy",
            EmbeddingField::ProducedBy => "producedBy",
            EmbeddingField::Seasons => "seasons",
            EmbeddingField::Episodes => "episodes",
        }
    }

    /// Key of the human-readable label inside each embedded element.
    ///
    /// People are labelled by `name`, seasons and episodes by `title`.
    pub const fn label_key(self) -> &'static str {
        match self {
            EmbeddingField::Seasons | EmbeddingField::Episodes => "title",
            _ => "name",
        }
    }

    /// Collections whose documents may embed this field, in fan-out order.
    pub const fn host_collections(self) -> &'static [Collection] {
        match self {
            EmbeddingField::Seasons => &[Collection::Shows],
            EmbeddingField::Episodes => &[Collection::Seasons],
            _ => &[Collection::Shows, Collection::Seasons, Collection::Episodes],
        }
    }
}

impl fmt::Display for EmbeddingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// A single propagation destination: one embedded array in one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectionTarget {
    pub collection: Collection,
    pub field: EmbeddingField,
}

impl ProjectionTarget {
    pub const fn new(collection: Collection, field: EmbeddingField) -> Self {
        Self { collection, field }
    }

    /// Expand a field into one target per host collection.
    pub fn for_field(field: EmbeddingField) -> impl Iterator<Item = ProjectionTarget> {
        field
            .host_collections()
            .iter()
            .map(move |&collection| ProjectionTarget::new(collection, field))
    }
}

impl fmt::Display for ProjectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.collection, self.field)
    }
}
