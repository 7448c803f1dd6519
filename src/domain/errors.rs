//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Telegram gateway error: {0}")]
    Gateway(String),

    #[error("Metadata provider error: {0}")]
    Metadata(String),

    #[error("Store error: {0}")]
    Store(String),
}
