use super::{AuthState, SelectionState, TokenData};
use crate::api::SpotifyClient;
use crate::utils::ApiError;

/// Everything one user's run keeps between steps
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub auth: AuthState,
    pub selection: SelectionState,
}

impl Session {
    pub fn with_token(token: TokenData) -> Self {
        let mut session = Self::default();
        session.auth.set_token(token);
        session
    }

    /// Client for the current token; fails if there is none or it has expired
    pub fn client(&self, base_url: &str) -> Result<SpotifyClient, ApiError> {
        let token = self.auth.valid_token()?;
        Ok(SpotifyClient::with_base_url(token.clone(), base_url))
    }

    /// Start over after a playlist is made; the login survives
    pub fn reset(&mut self) {
        self.selection.reset();
    }
}
