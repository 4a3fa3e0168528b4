//! Google session (access token) management.
//!
//! Tokens are stored as TOML under the calsync config directory and
//! refreshed against the OAuth token endpoint when expired. Sync
//! operations must not start without the session `load_valid` returns;
//! a missing or unrefreshable session is an authentication error, never
//! a per-item one.

use crate::config;
use calsync_core::{SyncError, SyncResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Refresh slightly early so a token cannot expire mid-run.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    data: SessionData,
}

impl Session {
    /// Build a session directly from token data (tests and embedding).
    pub fn from_data(data: SessionData) -> Self {
        Session { data }
    }

    pub fn access_token(&self) -> &str {
        &self.data.access_token
    }

    fn path() -> SyncResult<PathBuf> {
        let dir = config::base_dir().map_err(|e| SyncError::Auth(e.to_string()))?;
        Ok(dir.join("session.toml"))
    }

    fn load() -> SyncResult<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Err(SyncError::Auth(format!(
                "No Google session found at {}. Authenticate first and store the tokens there.",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| SyncError::Auth(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: SessionData = toml::from_str(&contents)
            .map_err(|e| SyncError::Auth(format!("Failed to parse {}: {}", path.display(), e)))?;

        Ok(Session { data })
    }

    fn is_expired(&self) -> bool {
        self.data.expires_at - Duration::seconds(EXPIRY_MARGIN_SECS) <= Utc::now()
    }

    /// Load the stored session, refreshing the access token if expired.
    pub async fn load_valid() -> SyncResult<Self> {
        let mut session = Self::load()?;

        if session.is_expired() {
            debug!("access token expired, refreshing");
            session.refresh().await?;
            session.save()?;
        }

        Ok(session)
    }

    async fn refresh(&mut self) -> SyncResult<()> {
        let creds = config::load_credentials().map_err(|e| SyncError::Auth(e.to_string()))?;

        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
            expires_in: i64,
            #[serde(default)]
            refresh_token: String,
        }

        let response = reqwest::Client::new()
            .post(TOKEN_URL)
            .form(&[
                ("client_id", creds.client_id.as_str()),
                ("client_secret", creds.client_secret.as_str()),
                ("refresh_token", self.data.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SyncError::Auth(format!("Token refresh failed: {e}")))?;

        let tokens: TokenResponse = response
            .json()
            .await
            .map_err(|e| SyncError::Auth(format!("Token refresh failed: {e}")))?;

        self.data.access_token = tokens.access_token;
        self.data.expires_at = Utc::now() + Duration::seconds(tokens.expires_in);
        // Google usually omits the refresh token on refresh.
        if !tokens.refresh_token.is_empty() {
            self.data.refresh_token = tokens.refresh_token;
        }

        Ok(())
    }

    fn save(&self) -> SyncResult<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SyncError::Auth(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let contents = toml::to_string_pretty(&self.data)
            .map_err(|e| SyncError::Auth(format!("Failed to serialize session: {e}")))?;
        std::fs::write(&path, contents)
            .map_err(|e| SyncError::Auth(format!("Failed to write {}: {}", path.display(), e)))?;

        Ok(())
    }
}
