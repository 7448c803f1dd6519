//! Persistence adapters implementing `MovieRepoPort`.

pub mod memory_repo;
pub mod mongo_repo;

pub use memory_repo::InMemoryMovieRepo;
pub use mongo_repo::MongoMovieRepo;
