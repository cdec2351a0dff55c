use crate::utils::ApiError;
use std::time::{SystemTime, UNIX_EPOCH};

/// Bearer token handed over by the login flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub access_token: String,
    pub expires_at: Option<u64>, // Unix seconds; None = expiry unknown
}

impl TokenData {
    pub fn new(access_token: impl Into<String>, expires_at: Option<u64>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    pub fn is_expired_at(&self, unix_secs: u64) -> bool {
        matches!(self.expires_at, Some(expires_at) if unix_secs >= expires_at)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(now_unix_secs())
    }
}

pub(crate) fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[derive(Debug, Default, Clone)]
pub struct AuthState {
    token: Option<TokenData>,
}

impl AuthState {
    pub fn set_token(&mut self, token: TokenData) {
        self.token = Some(token);
    }

    /// Check if user is authenticated (has a token that has not expired)
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Get current token if still valid
    pub fn get_token(&self) -> Option<&TokenData> {
        self.token.as_ref().filter(|t| !t.is_expired())
    }

    /// Current token, telling a missing login apart from an expired one
    pub fn valid_token(&self) -> Result<&TokenData, ApiError> {
        match &self.token {
            None => Err(ApiError::MissingToken),
            Some(token) if token.is_expired() => Err(ApiError::TokenExpired),
            Some(token) => Ok(token),
        }
    }
}
