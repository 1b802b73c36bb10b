//! MongoDB implementation of the propagator's store trait.
//!
//! Every write is a single `update_many` over one collection, addressing the
//! embedded element through the `$[elem]` filtered positional operator so
//! that every matching element in a document is updated, not just the first.

use bson::{doc, Bson, Document};
use marquee_core::catalog::ProjectionTarget;
use marquee_core::propagation::{PosterChange, ProjectionPatch, ProjectionStore};

use crate::error::{DbError, MongoContext};
use crate::DbPool;

/// Propagator store backed by the catalog database.
#[derive(Clone)]
pub struct MongoProjectionStore {
    pool: DbPool,
}

impl MongoProjectionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn collection(&self, target: ProjectionTarget) -> mongodb::Collection<Document> {
        self.pool.collection(target.collection.name())
    }
}

impl ProjectionStore for MongoProjectionStore {
    type Error = DbError;

    async fn update_projection(
        &self,
        target: ProjectionTarget,
        id: &str,
        patch: &ProjectionPatch,
    ) -> Result<u64, DbError> {
        let result = self
            .collection(target)
            .update_many(parent_filter(target, id), projection_update(target, patch))
            .array_filters(vec![element_filter(id)])
            .await
            .context("Failed to update embedded projection")?;
        tracing::debug!(%target, id, matched = result.matched_count, "Projection updated");
        Ok(result.matched_count)
    }

    async fn pull_projection_poster(
        &self,
        target: ProjectionTarget,
        id: &str,
        path: &str,
    ) -> Result<u64, DbError> {
        let result = self
            .collection(target)
            .update_many(parent_filter(target, id), poster_pull(target, path))
            .array_filters(vec![element_filter(id)])
            .await
            .context("Failed to pull embedded poster")?;
        tracing::debug!(%target, id, path, matched = result.matched_count, "Projection poster pulled");
        Ok(result.matched_count)
    }
}

// ---------------------------------------------------------------------------
// Update documents
// ---------------------------------------------------------------------------

/// Parent documents whose `target.field` array holds an element with `id`.
pub fn parent_filter(target: ProjectionTarget, id: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(format!("{}.id", target.field.name()), id);
    filter
}

/// The `arrayFilters` entry binding `$[elem]` to elements with `id`.
pub fn element_filter(id: &str) -> Document {
    doc! { "elem.id": id }
}

fn element_path(target: ProjectionTarget, key: &str) -> String {
    format!("{}.$[elem].{key}", target.field.name())
}

/// `$set` the label (and rating/resume when given) and either `$addToSet`
/// the new poster paths or `$set` the whole list.
pub fn projection_update(target: ProjectionTarget, patch: &ProjectionPatch) -> Document {
    let mut set = Document::new();
    set.insert(element_path(target, target.field.label_key()), patch.label.as_str());
    if let Some(rating) = patch.rating {
        set.insert(element_path(target, "rating"), rating);
    }
    if let Some(resume) = &patch.resume {
        set.insert(element_path(target, "resume"), resume.as_str());
    }

    let mut update = Document::new();
    match &patch.posters {
        PosterChange::Replace(paths) => {
            set.insert(element_path(target, "postersPath"), string_array(paths));
            update.insert("$set", set);
        }
        PosterChange::Append(paths) => {
            update.insert("$set", set);
            if !paths.is_empty() {
                let mut add = Document::new();
                add.insert(
                    element_path(target, "postersPath"),
                    doc! { "$each": string_array(paths) },
                );
                update.insert("$addToSet", add);
            }
        }
    }
    update
}

/// `$pull` one exact path from the matching elements' poster lists.
pub fn poster_pull(target: ProjectionTarget, path: &str) -> Document {
    let mut pull = Document::new();
    pull.insert(element_path(target, "postersPath"), path);
    doc! { "$pull": pull }
}

fn string_array(paths: &[String]) -> Bson {
    Bson::Array(paths.iter().map(|p| Bson::String(p.clone())).collect())
}

#[cfg(test)]
mod tests {
    use marquee_core::catalog::{Collection, EmbeddingField};

    use super::*;

    fn target(collection: Collection, field: EmbeddingField) -> ProjectionTarget {
        ProjectionTarget::new(collection, field)
    }

    #[test]
    fn filter_addresses_embedded_id() {
        let t = target(Collection::Episodes, EmbeddingField::DirectedBy);
        assert_eq!(parent_filter(t, "c1"), doc! { "directedBy.id": "c1" });
        assert_eq!(element_filter("c1"), doc! { "elem.id": "c1" });
    }

    #[test]
    fn celebrity_rename_with_new_posters() {
        let t = target(Collection::Shows, EmbeddingField::Starring);
        let patch = ProjectionPatch {
            label: "Jane Smith".into(),
            posters: PosterChange::Append(vec!["/celebrities/c1/a.png".into()]),
            rating: None,
            resume: None,
        };
        assert_eq!(
            projection_update(t, &patch),
            doc! {
                "$set": { "starring.$[elem].name": "Jane Smith" },
                "$addToSet": { "starring.$[elem].postersPath": { "$each": ["/celebrities/c1/a.png"] } },
            }
        );
    }

    #[test]
    fn rename_without_posters_skips_add_to_set() {
        let t = target(Collection::Seasons, EmbeddingField::WrittenBy);
        let patch = ProjectionPatch {
            label: "New Name".into(),
            posters: PosterChange::Append(vec![]),
            rating: None,
            resume: None,
        };
        assert_eq!(
            projection_update(t, &patch),
            doc! { "$set": { "writtenBy.$[elem].name": "New Name" } }
        );
    }

    #[test]
    fn episode_replacement_sets_every_field() {
        let t = target(Collection::Seasons, EmbeddingField::Episodes);
        let patch = ProjectionPatch {
            label: "Pilot".into(),
            posters: PosterChange::Replace(vec!["/series/a/b/c/x.jpg".into()]),
            rating: Some(9.1),
            resume: Some("Intro".into()),
        };
        assert_eq!(
            projection_update(t, &patch),
            doc! {
                "$set": {
                    "episodes.$[elem].title": "Pilot",
                    "episodes.$[elem].rating": 9.1,
                    "episodes.$[elem].resume": "Intro",
                    "episodes.$[elem].postersPath": ["/series/a/b/c/x.jpg"],
                },
            }
        );
    }

    #[test]
    fn pull_targets_element_posters() {
        let t = target(Collection::Shows, EmbeddingField::Seasons);
        assert_eq!(
            poster_pull(t, "/series/sh/se/a.jpg"),
            doc! { "$pull": { "seasons.$[elem].postersPath": "/series/sh/se/a.jpg" } }
        );
    }
}
