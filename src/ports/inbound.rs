//! Inbound port. The message source (adapter) drives the application.

use crate::domain::DomainError;

/// Input port: consume channel posts until the process is stopped.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the listener loop. Returns only on a fatal gateway error.
    async fn run(&self) -> Result<(), DomainError>;
}
