//! grammers Client bootstrap with persistent session storage.
//!
//! Loads an existing session from `session_path` if present; otherwise a
//! new session is created and saved after the bot-token sign-in.

use crate::domain::DomainError;
use grammers_client::{Client, Config, InitParams};
use grammers_session::Session;
use std::path::Path;
use tracing::info;

/// Connect and ensure the client is signed in as the bot.
pub async fn connect_bot(
    api_id: i32,
    api_hash: &str,
    bot_token: &str,
    session_path: &Path,
) -> Result<Client, DomainError> {
    let session = Session::load_file_or_create(session_path)
        .map_err(|e| DomainError::Gateway(format!("session load failed: {}", e)))?;

    let client = Client::connect(Config {
        session,
        api_id,
        api_hash: api_hash.to_string(),
        params: InitParams::default(),
    })
    .await
    .map_err(|e| DomainError::Gateway(format!("connect failed: {}", e)))?;

    let authorized = client
        .is_authorized()
        .await
        .map_err(|e| DomainError::Gateway(e.to_string()))?;
    if !authorized {
        info!("no saved authorization, signing in with bot token");
        client
            .bot_sign_in(bot_token)
            .await
            .map_err(|e| DomainError::Gateway(format!("bot sign-in failed: {}", e)))?;
        client
            .session()
            .save_to_file(session_path)
            .map_err(|e| DomainError::Gateway(format!("session save failed: {}", e)))?;
        info!(path = %session_path.display(), "session saved");
    }

    Ok(client)
}
