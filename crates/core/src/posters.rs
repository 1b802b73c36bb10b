//! Poster path construction.
//!
//! Image bytes live outside the service; documents only carry relative
//! paths of the form `/{category}/{parent ids...}/{image}`.

use crate::error::CoreError;

/// Top-level directory a poster path starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterCategory {
    Celebrities,
    Series,
    Movie,
    Articles,
}

impl PosterCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            PosterCategory::Celebrities => "celebrities",
            PosterCategory::Series => "series",
            PosterCategory::Movie => "movie",
            PosterCategory::Articles => "articles",
        }
    }
}

/// Build `/{category}/{id}/.../{image}`.
///
/// The image name must be a single non-empty path segment.
pub fn poster_path(category: PosterCategory, parent_ids: &[&str], image: &str) -> Result<String, CoreError> {
    validate_segment("image", image)?;
    let mut path = format!("/{}", category.as_str());
    for id in parent_ids {
        validate_segment("id", id)?;
        path.push('/');
        path.push_str(id);
    }
    path.push('/');
    path.push_str(image);
    Ok(path)
}

fn validate_segment(what: &str, segment: &str) -> Result<(), CoreError> {
    if segment.is_empty() {
        return Err(CoreError::Validation(format!("Poster {what} must not be empty")));
    }
    if segment.contains('/') || segment == "." || segment == ".." {
        return Err(CoreError::Validation(format!(
            "Poster {what} '{segment}' must be a single path segment"
        )));
    }
    Ok(())
}

pub fn celebrity_poster(celebrity_id: &str, image: &str) -> Result<String, CoreError> {
    poster_path(PosterCategory::Celebrities, &[celebrity_id], image)
}

pub fn series_poster(show_id: &str, image: &str) -> Result<String, CoreError> {
    poster_path(PosterCategory::Series, &[show_id], image)
}

pub fn movie_poster(show_id: &str, image: &str) -> Result<String, CoreError> {
    poster_path(PosterCategory::Movie, &[show_id], image)
}

pub fn season_poster(show_id: &str, season_id: &str, image: &str) -> Result<String, CoreError> {
    poster_path(PosterCategory::Series, &[show_id, season_id], image)
}

pub fn episode_poster(
    show_id: &str,
    season_id: &str,
    episode_id: &str,
    image: &str,
) -> Result<String, CoreError> {
    poster_path(PosterCategory::Series, &[show_id, season_id, episode_id], image)
}

pub fn article_poster(article_id: &str, image: &str) -> Result<String, CoreError> {
    poster_path(PosterCategory::Articles, &[article_id], image)
}
