//! Application use cases. Orchestrate domain logic via ports.

pub mod ingest_service;
pub mod movie_store;

pub use ingest_service::IngestService;
pub use movie_store::MovieStore;
