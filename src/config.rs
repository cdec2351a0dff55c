use crate::constants::{REQUEST_TIMEOUT_SECS, SPOTIFY_API_BASE_URL};
use crate::state::{Session, TokenData};
use clap::Args;
use std::time::Duration;

/// Connection settings, read from flags or the environment (`.env` included)
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Spotify bearer token from the login flow
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Token expiry as unix seconds
    #[arg(long, env = "SPOTIFY_TOKEN_EXPIRES_AT", global = true)]
    pub token_expires_at: Option<u64>,

    #[arg(long, env = "SPOTIFY_API_BASE_URL", default_value = SPOTIFY_API_BASE_URL, global = true)]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "TEMPO_RUN_REQUEST_TIMEOUT_SECS",
        default_value_t = REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn token(&self) -> Option<TokenData> {
        self.access_token
            .as_ref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| TokenData::new(t.trim(), self.token_expires_at))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Fresh session carrying the configured token, if any
    pub fn session(&self) -> Session {
        match self.token() {
            Some(token) => Session::with_token(token),
            None => Session::default(),
        }
    }
}
