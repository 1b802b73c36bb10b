//! Pure domain logic for the Marquee media catalog.
//!
//! Nothing in this crate touches the network or the database: the projection
//! propagator talks to storage only through the [`propagation::ProjectionStore`]
//! trait, which `marquee-db` implements on top of MongoDB.

pub mod catalog;
pub mod dates;
pub mod error;
pub mod occupation;
pub mod posters;
pub mod projection;
pub mod propagation;
pub mod types;
pub mod uniqueness;
