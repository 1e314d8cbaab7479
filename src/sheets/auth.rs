use crate::config::Config;
use crate::error::{AppError, Result};
use crate::sheets::AUTH_SCOPE;
use hyper_util::client::legacy::connect::HttpConnector;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use yup_oauth2::{
    ServiceAccountAuthenticator, ServiceAccountKey, authenticator::Authenticator,
    hyper_rustls::HttpsConnector,
};

pub(super) type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Read a service account key downloaded from the Cloud console.
pub async fn read_credentials(path: &Path) -> Result<ServiceAccountKey> {
    yup_oauth2::read_service_account_key(path).await.map_err(|e| {
        AppError::Auth(format!(
            "Failed to read service account key {:?}: {}",
            path, e
        ))
    })
}

/// Create and verify authenticator by fetching a token
pub(super) async fn create_and_verify_authenticator(key: ServiceAccountKey) -> Result<AuthType> {
    if key.client_email.is_empty() || key.private_key.is_empty() {
        return Err(AppError::Auth(
            "Service account key must have client_email and private_key".to_string(),
        ));
    }

    let token_cache_path = token_cache_path()?;

    // Create parent directory if it doesn't exist
    if let Some(parent) = token_cache_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Auth(format!("Failed to create token cache directory: {}", e))
        })?;
    }

    let auth = ServiceAccountAuthenticator::builder(key)
        .persist_tokens_to_disk(token_cache_path)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    // Trigger authentication by requesting a token
    let _token = auth
        .token(&[AUTH_SCOPE])
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    Ok(auth)
}

/// Clear cached Google tokens by deleting the token cache file
#[instrument(name = "Clearing auth tokens for Google Sheets", skip_all)]
pub fn clear_tokens() -> Result<()> {
    let token_path = token_cache_path()?;

    if !token_path.exists() {
        debug!("No Google Sheets tokens to clear");
        return Ok(());
    }

    fs::remove_file(&token_path)
        .map_err(|e| AppError::Auth(format!("Failed to delete tokens file: {}", e)))?;
    debug!("Cleared Google Sheets cached tokens");

    Ok(())
}

fn token_cache_path() -> Result<PathBuf> {
    Config::cache_file("google_tokens.json")
}
