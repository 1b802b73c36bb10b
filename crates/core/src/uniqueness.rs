//! Natural-key uniqueness rules checked before inserts.
//!
//! Callers load the candidate rows (usually narrowed by a query) and hand
//! them in; these helpers only decide whether the new record collides.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Celebrities and shows are unique by `(name, date)`.
pub fn ensure_unique_name_and_date<'a, I>(
    entity: &str,
    existing: I,
    name: &str,
    date: Timestamp,
) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (&'a str, Timestamp)>,
{
    let clash = existing
        .into_iter()
        .any(|(existing_name, existing_date)| existing_name == name && existing_date == date);
    if clash {
        return Err(CoreError::Conflict(format!(
            "{entity} '{name}' dated {} already exists",
            date.format("%Y-%m-%d")
        )));
    }
    Ok(())
}

/// Seasons are unique by title within a show, episodes within a season.
pub fn ensure_unique_title<'a, I>(entity: &str, siblings: I, title: &str) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    if siblings.into_iter().any(|existing| existing == title) {
        return Err(CoreError::Conflict(format!(
            "{entity} titled '{title}' already exists under the same parent"
        )));
    }
    Ok(())
}

/// Genres and journalists are unique by name.
pub fn ensure_name_available(entity: &str, name: &str, taken: bool) -> Result<(), CoreError> {
    if taken {
        return Err(CoreError::Conflict(format!("{entity} '{name}' already exists")));
    }
    Ok(())
}
