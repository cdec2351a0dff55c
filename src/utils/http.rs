// Shared HTTP plumbing for the Spotify client
use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::utils::error_handling::truncate_body;
use crate::utils::ApiError;
use once_cell::sync::Lazy;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

const MAX_ERROR_BODY_CHARS: usize = 300;

static SHARED_CLIENT: Lazy<Client> = Lazy::new(|| {
    build_client(Duration::from_secs(REQUEST_TIMEOUT_SECS)).unwrap_or_else(|e| {
        log::warn!("[Http] Falling back to default client: {}", e);
        Client::new()
    })
});

/// Client with the default request timeout, reused across calls
pub fn shared_client() -> Client {
    SHARED_CLIENT.clone()
}

/// Build a client whose every request fails after `timeout`
pub fn build_client(timeout: Duration) -> Result<Client, ApiError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!("tempo-run/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Send an already-authorized request and decode the JSON body
pub async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &'static str,
) -> Result<T, ApiError> {
    let response = request.send().await?;
    read_json(response, endpoint).await
}

/// Check the status and decode, keeping transport, status and shape failures apart
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &'static str,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::debug!("[Http] {} returned status {}", endpoint, status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: truncate_body(&body, MAX_ERROR_BODY_CHARS),
        });
    }

    serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
}
