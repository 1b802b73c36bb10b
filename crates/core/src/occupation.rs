//! Celebrity occupation tags and the embedded field each one feeds.
//!
//! Occupations are stored as free-form strings on the celebrity document.
//! Only the five tags below take part in propagation; anything else is kept
//! on the record but never reaches a show, season or episode.

use std::str::FromStr;

use crate::catalog::EmbeddingField;

pub const OCCUPATION_ACTOR: &str = "Actor";
pub const OCCUPATION_ACTRESS: &str = "Actress";
pub const OCCUPATION_WRITER: &str = "Writer";
pub const OCCUPATION_DIRECTOR: &str = "Director";
pub const OCCUPATION_PRODUCER: &str = "Producer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupation {
    Actor,
    Actress,
    Writer,
    Director,
    Producer,
}

/// Returned when a tag is not one of the known occupations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown occupation '{0}'")]
pub struct UnknownOccupation(pub String);

impl Occupation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Occupation::Actor => OCCUPATION_ACTOR,
            Occupation::Actress => OCCUPATION_ACTRESS,
            Occupation::Writer => OCCUPATION_WRITER,
            Occupation::Director => OCCUPATION_DIRECTOR,
            Occupation::Producer => OCCUPATION_PRODUCER,
        }
    }

    /// The array a celebrity with this occupation is embedded under.
    pub const fn embedding_field(self) -> EmbeddingField {
        match self {
            Occupation::Actor | Occupation::Actress => EmbeddingField::Starring,
            Occupation::Writer => EmbeddingField::WrittenBy,
            Occupation::Director => EmbeddingField::DirectedBy,
            Occupation::Producer => EmbeddingField::ProducedBy,
        }
    }
}

impl FromStr for Occupation {
    type Err = UnknownOccupation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            OCCUPATION_ACTOR => Ok(Occupation::Actor),
            OCCUPATION_ACTRESS => Ok(Occupation::Actress),
            OCCUPATION_WRITER => Ok(Occupation::Writer),
            OCCUPATION_DIRECTOR => Ok(Occupation::Director),
            OCCUPATION_PRODUCER => Ok(Occupation::Producer),
            other => Err(UnknownOccupation(other.to_string())),
        }
    }
}

/// Resolve a celebrity's occupation tags to the distinct embedding fields
/// they feed, in first-seen order. Unknown tags are skipped.
pub fn embedding_fields<S: AsRef<str>>(tags: &[S]) -> Vec<EmbeddingField> {
    let mut fields = Vec::new();
    for tag in tags {
        let Ok(occupation) = tag.as_ref().parse::<Occupation>() else {
            continue;
        };
        let field = occupation.embedding_field();
        if !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn actor_and_actress_share_starring() {
        assert_eq!(Occupation::Actor.embedding_field(), EmbeddingField::Starring);
        assert_eq!(Occupation::Actress.embedding_field(), EmbeddingField::Starring);
    }

    #[test]
    fn crew_mapping() {
        assert_eq!(Occupation::Writer.embedding_field(), EmbeddingField::WrittenBy);
        assert_eq!(Occupation::Director.embedding_field(), EmbeddingField::DirectedBy);
        assert_eq!(Occupation::Producer.embedding_field(), EmbeddingField::ProducedBy);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("Director".parse::<Occupation>(), Ok(Occupation::Director));
        assert_matches!("director".parse::<Occupation>(), Err(UnknownOccupation(tag)) if tag == "director");
    }

    #[test]
    fn round_trips_through_as_str() {
        for occupation in [
            Occupation::Actor,
            Occupation::Actress,
            Occupation::Writer,
            Occupation::Director,
            Occupation::Producer,
        ] {
            assert_eq!(occupation.as_str().parse::<Occupation>(), Ok(occupation));
        }
    }

    #[test]
    fn empty_tags_give_no_fields() {
        let tags: Vec<String> = vec![];
        assert!(embedding_fields(&tags).is_empty());
    }

    #[test]
    fn unknown_tags_are_skipped() {
        assert_eq!(
            embedding_fields(&["Stuntman", "Writer", "Cinematographer"]),
            vec![EmbeddingField::WrittenBy]
        );
    }

    #[test]
    fn duplicate_fields_collapse_in_first_seen_order() {
        assert_eq!(
            embedding_fields(&["Producer", "Actress", "Actor", "Producer"]),
            vec![EmbeddingField::ProducedBy, EmbeddingField::Starring]
        );
    }
}
