//! Update listener. Implements InputPort over the grammers update stream.
//!
//! Each indexable post is handled on its own task so a slow metadata or
//! store call never delays the next update. Failures are logged and never
//! reported back to the channel.

use crate::adapters::telegram::mapper;
use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::IngestService;
use grammers_client::{Client, Update};
use std::sync::Arc;
use tracing::{debug, warn};

/// Channel post listener. Consumes updates until the process is stopped.
pub struct ChannelListener {
    client: Client,
    ingest: Arc<IngestService>,
}

impl ChannelListener {
    pub fn new(client: Client, ingest: Arc<IngestService>) -> Self {
        Self { client, ingest }
    }
}

#[async_trait::async_trait]
impl InputPort for ChannelListener {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let update = self
                .client
                .next_update()
                .await
                .map_err(|e| DomainError::Gateway(e.to_string()))?;

            match update {
                Update::NewMessage(message) if !message.outgoing() => {
                    match mapper::post_from_message(&message) {
                        Some(post) => {
                            debug!(
                                file_id = %post.media_file_id,
                                kind = ?post.media_kind,
                                "channel media post received"
                            );
                            let ingest = Arc::clone(&self.ingest);
                            tokio::spawn(async move {
                                if let Err(e) = ingest.handle_post(post).await {
                                    warn!(error = %e, "failed to index post");
                                }
                            });
                        }
                        None => debug!("ignoring message without supported media"),
                    }
                }
                _ => {}
            }
        }
    }
}
