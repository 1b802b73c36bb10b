//! Projection propagator.
//!
//! Shows, seasons and episodes embed short copies of celebrities, seasons
//! and episodes. When the canonical record changes, the propagator pushes
//! the change into every embedded copy, one store write per
//! `(collection, field)` target.
//!
//! Writes are independent: the first failing write stops the fan-out and
//! the error names every target that was already applied. Nothing is rolled
//! back.

use std::future::Future;

use serde::Serialize;

use crate::catalog::{Collection, EmbeddingField, ProjectionTarget};
use crate::error::{CoreError, PropagationFailure};
use crate::occupation;
use crate::posters;
use crate::projection::{ShortEpisode, ShortSeason};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Store boundary
// ---------------------------------------------------------------------------

/// How an embedded element's poster list changes.
#[derive(Debug, Clone, PartialEq)]
pub enum PosterChange {
    /// Add paths not already present, keeping existing ones.
    Append(Vec<String>),
    /// Overwrite the whole list.
    Replace(Vec<String>),
}

/// Field values written into every embedded element with a matching id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPatch {
    /// New `name` (people) or `title` (seasons, episodes).
    pub label: String,
    pub posters: PosterChange,
    pub rating: Option<f64>,
    pub resume: Option<String>,
}

/// Storage operations the propagator needs.
///
/// Both operations return how many parent documents matched; zero is not an
/// error.
pub trait ProjectionStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Apply `patch` to every element with `id` in `target.field` across
    /// `target.collection`.
    fn update_projection(
        &self,
        target: ProjectionTarget,
        id: &str,
        patch: &ProjectionPatch,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Remove `path` from `postersPath` of every element with `id` in
    /// `target.field` across `target.collection`.
    fn pull_projection_poster(
        &self,
        target: ProjectionTarget,
        id: &str,
        path: &str,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// One completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedWrite {
    pub target: ProjectionTarget,
    pub matched: u64,
}

/// Outcome of a successful propagation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropagationReport {
    pub entity_id: EntityId,
    pub writes: Vec<AppliedWrite>,
}

impl PropagationReport {
    fn new(entity_id: &str) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            writes: Vec::new(),
        }
    }

    /// Total parent documents matched across all targets.
    pub fn total_matched(&self) -> u64 {
        self.writes.iter().map(|w| w.matched).sum()
    }

    pub fn targets(&self) -> Vec<ProjectionTarget> {
        self.writes.iter().map(|w| w.target).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Push a celebrity's new name and freshly uploaded poster paths into every
/// field its occupations map to, in shows, seasons and episodes.
pub async fn propagate_update<S, T>(
    store: &S,
    celebrity_id: &str,
    new_name: &str,
    new_poster_paths: &[String],
    role_tags: &[T],
) -> Result<PropagationReport, CoreError>
where
    S: ProjectionStore,
    T: AsRef<str>,
{
    let patch = ProjectionPatch {
        label: new_name.to_string(),
        posters: PosterChange::Append(new_poster_paths.to_vec()),
        rating: None,
        resume: None,
    };
    let targets = celebrity_targets(role_tags);
    Ok(apply(store, celebrity_id, &targets, Write::Update(&patch)).await?)
}

/// Remove `/celebrities/<id>/<image>` from every embedded copy of the
/// celebrity.
pub async fn propagate_delete<S, T>(
    store: &S,
    celebrity_id: &str,
    image: &str,
    role_tags: &[T],
) -> Result<PropagationReport, CoreError>
where
    S: ProjectionStore,
    T: AsRef<str>,
{
    let path = posters::celebrity_poster(celebrity_id, image)?;
    let targets = celebrity_targets(role_tags);
    Ok(apply(store, celebrity_id, &targets, Write::Pull(&path)).await?)
}

/// Replace the season's entry in `Shows.seasons`.
pub async fn propagate_season_update<S: ProjectionStore>(
    store: &S,
    season: &ShortSeason,
) -> Result<PropagationReport, CoreError> {
    let patch = ProjectionPatch {
        label: season.title.clone(),
        posters: PosterChange::Replace(season.posters_path.clone()),
        rating: Some(season.rating),
        resume: None,
    };
    let targets = [ProjectionTarget::new(Collection::Shows, EmbeddingField::Seasons)];
    Ok(apply(store, &season.id, &targets, Write::Update(&patch)).await?)
}

/// Remove `/series/<show>/<season>/<image>` from the season's entry in
/// `Shows.seasons`.
pub async fn propagate_season_poster_delete<S: ProjectionStore>(
    store: &S,
    show_id: &str,
    season_id: &str,
    image: &str,
) -> Result<PropagationReport, CoreError> {
    let path = posters::season_poster(show_id, season_id, image)?;
    let targets = [ProjectionTarget::new(Collection::Shows, EmbeddingField::Seasons)];
    Ok(apply(store, season_id, &targets, Write::Pull(&path)).await?)
}

/// Replace the episode's entry in `Seasons.episodes`.
pub async fn propagate_episode_update<S: ProjectionStore>(
    store: &S,
    episode: &ShortEpisode,
) -> Result<PropagationReport, CoreError> {
    let patch = ProjectionPatch {
        label: episode.title.clone(),
        posters: PosterChange::Replace(episode.posters_path.clone()),
        rating: Some(episode.rating),
        resume: Some(episode.resume.clone()),
    };
    let targets = [ProjectionTarget::new(Collection::Seasons, EmbeddingField::Episodes)];
    Ok(apply(store, &episode.id, &targets, Write::Update(&patch)).await?)
}

/// Remove `/series/<show>/<season>/<episode>/<image>` from the episode's
/// entry in `Seasons.episodes`.
pub async fn propagate_episode_poster_delete<S: ProjectionStore>(
    store: &S,
    show_id: &str,
    season_id: &str,
    episode_id: &str,
    image: &str,
) -> Result<PropagationReport, CoreError> {
    let path = posters::episode_poster(show_id, season_id, episode_id, image)?;
    let targets = [ProjectionTarget::new(Collection::Seasons, EmbeddingField::Episodes)];
    Ok(apply(store, episode_id, &targets, Write::Pull(&path)).await?)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Write<'a> {
    Update(&'a ProjectionPatch),
    Pull(&'a str),
}

fn celebrity_targets<T: AsRef<str>>(role_tags: &[T]) -> Vec<ProjectionTarget> {
    occupation::embedding_fields(role_tags)
        .into_iter()
        .flat_map(ProjectionTarget::for_field)
        .collect()
}

async fn apply<S: ProjectionStore>(
    store: &S,
    entity_id: &str,
    targets: &[ProjectionTarget],
    write: Write<'_>,
) -> Result<PropagationReport, PropagationFailure> {
    let mut report = PropagationReport::new(entity_id);
    for &target in targets {
        let outcome = match write {
            Write::Update(patch) => store.update_projection(target, entity_id, patch).await,
            Write::Pull(path) => store.pull_projection_poster(target, entity_id, path).await,
        };
        match outcome {
            Ok(matched) => report.writes.push(AppliedWrite { target, matched }),
            Err(err) => {
                return Err(PropagationFailure {
                    entity_id: entity_id.to_string(),
                    target,
                    applied: report.targets(),
                    message: err.to_string(),
                })
            }
        }
    }
    Ok(report)
}
