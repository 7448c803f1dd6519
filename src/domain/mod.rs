//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod caption;
pub mod entities;
pub mod errors;
pub mod record;

pub use caption::{classify_category, parse_caption};
pub use entities::{
    Category, CrewMember, IncomingPost, MediaKind, MovieCandidate, MovieDetails, MovieRecord,
    ParsedCaption, VideoRef,
};
pub use errors::DomainError;
