//! Application configuration. Credentials, store names, timeouts.
//!
//! Read from the environment (variable names match the original
//! deployment, so no prefix) with an optional CINEDEX_CONFIG file source.
//! Presence of required values is enforced at startup in main.

use serde::Deserialize;

/// Per-request timeout for metadata calls, in seconds.
pub const DEFAULT_TMDB_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot credential from @BotFather. Read from BOT_TOKEN.
    pub bot_token: Option<String>,

    /// MTProto application id/hash from https://my.telegram.org.
    pub api_id: Option<i32>,
    pub api_hash: Option<String>,

    /// Metadata provider key. Read from TMDB_API_KEY.
    pub tmdb_api_key: Option<String>,

    /// Store connection string. Read from MONGODB_URI.
    pub mongodb_uri: Option<String>,

    /// Database / collection names. MONGO_DB_NAME, MONGO_COLLECTION.
    #[serde(default)]
    pub mongo_db_name: Option<String>,
    #[serde(default)]
    pub mongo_collection: Option<String>,

    /// Telegram session file path. Read from SESSION_PATH.
    #[serde(default)]
    pub session_path: Option<String>,

    /// Metadata request timeout in seconds. Read from TMDB_TIMEOUT_SECS.
    #[serde(default)]
    pub tmdb_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::default());
        if let Ok(path) = std::env::var("CINEDEX_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the database name. Defaults to "moviesdb".
    pub fn mongo_db_name_or_default(&self) -> String {
        self.mongo_db_name
            .clone()
            .unwrap_or_else(|| "moviesdb".to_string())
    }

    /// Returns the collection name. Defaults to "movies".
    pub fn mongo_collection_or_default(&self) -> String {
        self.mongo_collection
            .clone()
            .unwrap_or_else(|| "movies".to_string())
    }

    /// Returns the session file path. Defaults to "./cinedex.session".
    pub fn session_path_or_default(&self) -> String {
        self.session_path
            .clone()
            .unwrap_or_else(|| "./cinedex.session".to_string())
    }

    /// Returns the metadata timeout in seconds. Defaults to 10.
    pub fn tmdb_timeout_secs_or_default(&self) -> u64 {
        self.tmdb_timeout_secs.unwrap_or(DEFAULT_TMDB_TIMEOUT_SECS)
    }
}
