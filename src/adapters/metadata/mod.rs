//! Metadata provider adapters implementing `MetadataPort`.

pub mod tmdb;

pub use tmdb::TmdbAdapter;
