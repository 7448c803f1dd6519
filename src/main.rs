//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run
//! the listener. No business logic here.

use cinedex::adapters::metadata::TmdbAdapter;
use cinedex::adapters::persistence::MongoMovieRepo;
use cinedex::adapters::telegram::{client::connect_bot, ChannelListener};
use cinedex::ports::{InputPort, MetadataPort, MovieRepoPort};
use cinedex::shared::config::AppConfig;
use cinedex::usecases::{IngestService, MovieStore};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().unwrap_or_default();

    let bot_token = cfg.bot_token.clone().unwrap_or_default();
    let tmdb_api_key = cfg.tmdb_api_key.clone().unwrap_or_default();
    let mongodb_uri = cfg.mongodb_uri.clone().unwrap_or_default();
    if bot_token.is_empty() || tmdb_api_key.is_empty() || mongodb_uri.is_empty() {
        anyhow::bail!("Missing ENV: BOT_TOKEN / TMDB_API_KEY / MONGODB_URI");
    }
    let api_id = cfg.api_id.unwrap_or(0);
    let api_hash = cfg.api_hash.clone().unwrap_or_default();
    if api_id == 0 || api_hash.is_empty() {
        anyhow::bail!("Set API_ID and API_HASH (env or .env). Get from https://my.telegram.org");
    }

    // --- Store ---
    let repo = MongoMovieRepo::connect(
        &mongodb_uri,
        &cfg.mongo_db_name_or_default(),
        &cfg.mongo_collection_or_default(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("MongoDB connect failed: {}", e))?;
    let repo: Arc<dyn MovieRepoPort> = Arc::new(repo);
    let store = MovieStore::new(repo);

    // --- Metadata provider ---
    let timeout = Duration::from_secs(cfg.tmdb_timeout_secs_or_default());
    let metadata: Arc<dyn MetadataPort> = Arc::new(
        TmdbAdapter::new(tmdb_api_key, timeout).map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    // --- Ingest service ---
    let ingest = Arc::new(IngestService::new(metadata, store));

    // --- Telegram client (bot sign-in, file-backed session) ---
    let session_path = PathBuf::from(cfg.session_path_or_default());
    let client = connect_bot(api_id, &api_hash, &bot_token, &session_path)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Run ---
    let listener: Arc<dyn InputPort> = Arc::new(ChannelListener::new(client, ingest));
    info!("bot running and listening for channel posts");
    listener
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
