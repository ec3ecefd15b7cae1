//! Session and token persistence
//!
//! The admin UI keeps its login token across restarts. `TokenStorage`
//! is the on-disk equivalent of the browser's localStorage entry;
//! `Session` ties token, current user, and navigation menu together.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use shared::client::MenuItem;
use shared::models::User;

use crate::{ClientConfig, ClientError, ClientResult, HttpClient};

/// A persisted login token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    /// Identifier the token was issued for
    pub identifier: String,
    pub token: String,
    /// Unix timestamp of when the token was saved
    pub saved_at: u64,
}

impl StoredToken {
    pub fn new(identifier: impl Into<String>, token: impl Into<String>) -> Self {
        let saved_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            identifier: identifier.into(),
            token: token.into(),
            saved_at,
        }
    }
}

/// On-disk storage for the login token
///
/// Tokens live at `<base>/<profile>/token.json` so multiple backend
/// profiles can coexist under one config directory.
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    pub fn new(base_dir: &Path, profile: &str) -> Self {
        Self {
            path: base_dir.join(profile).join("token.json"),
        }
    }

    /// Path of the token file
    pub fn token_path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Persist a token, creating parent directories as needed
    pub fn save(&self, token: &StoredToken) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(ClientError::Storage)?;
        }
        let json = serde_json::to_string_pretty(token)?;
        fs::write(&self.path, json).map_err(ClientError::Storage)?;
        Ok(())
    }

    /// Load the stored token, if any
    ///
    /// An unreadable or corrupt file is treated as "no token".
    pub fn load(&self) -> Option<StoredToken> {
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Remove the stored token
    pub fn delete(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(ClientError::Storage)?;
        }
        Ok(())
    }
}

/// Authenticated session against the LMS backend
///
/// Holds the HTTP client plus the state the admin UI needs globally:
/// the current user and the navigation menu.
pub struct Session {
    http: HttpClient,
    storage: Option<TokenStorage>,
    user: Option<User>,
    menu: Vec<MenuItem>,
}

impl Session {
    /// Create an unauthenticated session
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            storage: None,
            user: None,
            menu: Vec::new(),
        }
    }

    /// Attach on-disk token persistence
    pub fn with_storage(mut self, storage: TokenStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Pick up a previously saved token, if one exists
    ///
    /// Returns whether a token was restored. The token may still be
    /// expired server-side; the first authenticated call decides.
    pub fn restore(&mut self) -> bool {
        let Some(stored) = self.storage.as_ref().and_then(TokenStorage::load) else {
            return false;
        };
        tracing::debug!(identifier = %stored.identifier, "restored saved token");
        self.http.set_token(stored.token);
        true
    }

    /// Login and load the current user and menu
    pub async fn login(&mut self, identifier: &str, password: &str) -> ClientResult<&User> {
        let response = self.http.login(identifier, password).await?;
        self.http.set_token(response.token.clone());

        if let Some(storage) = &self.storage {
            storage.save(&StoredToken::new(identifier, response.token))?;
        }

        self.refresh().await?;
        self.user
            .as_ref()
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".to_string()))
    }

    /// Reload the current user and menu from the backend
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.user = Some(self.http.me().await?.user);
        self.menu = self.http.menu().await?.menu;
        Ok(())
    }

    /// Forget the token and session state
    ///
    /// Local only; the backend keeps no session to invalidate.
    pub fn logout(&mut self) {
        self.http.clear_token();
        self.user = None;
        self.menu.clear();
        if let Some(storage) = &self.storage
            && let Err(err) = storage.delete()
        {
            tracing::warn!(%err, "failed to delete stored token");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    /// Current token, if logged in
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// The logged-in user, once loaded
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Navigation menu for the logged-in user
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu
    }

    /// The underlying HTTP client, for the API wrappers
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
