//! Session Store
//!
//! Holds the authenticated principal and the credential token, and keeps
//! both in durable storage so a restart does not sign the operator out.
//!
//! The session is an explicit handle passed to whoever needs it (the API
//! client, the application controller). Clones share the same state. Its
//! lifecycle is:
//!
//! ```text
//! Uninitialized → Restoring → Authenticated | Anonymous
//! ```
//!
//! Writes always replace the whole state, so readers never observe a
//! principal without its token.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::ApiError;
use crate::models::{LoginResponse, User};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key of the serialized principal
pub const USER_KEY: &str = "user";
/// Storage key of the literal `Authorization` header value
pub const AUTH_KEY: &str = "auth";

/// The value sent as the `Authorization` header
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialToken(String);

impl CredentialToken {
    /// `Basic <base64(email:password)>`
    pub fn basic(email: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{}:{}", email, password));
        Self(format!("Basic {}", encoded))
    }

    /// Wrap a header value read back from storage
    pub fn from_header_value(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn header_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialToken(<redacted>)")
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Restoring,
    Authenticated {
        principal: User,
        token: CredentialToken,
    },
    Anonymous,
}

impl SessionState {
    /// True until restoration has resolved
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Uninitialized | SessionState::Restoring)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn principal(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { principal, .. } => Some(principal),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&CredentialToken> {
        match self {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Something that can check credentials against the backend
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

/// Why a login attempt was refused
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The backend answered but did not accept the credentials
    #[error("Invalid credentials or insufficient permissions")]
    InvalidCredentials,

    /// Valid credentials for a user that is not an administrator
    #[error("Invalid credentials or insufficient permissions")]
    InsufficientPermissions,

    /// The login request itself failed
    #[error("Login failed. Please check your credentials.")]
    Failed(#[source] ApiError),

    /// The session could not be persisted
    #[error("Could not save session: {0}")]
    Storage(#[from] StorageError),
}

/// Shared handle to the process-wide session
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Create an uninitialized session backed by `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Uninitialized)),
            store,
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn principal(&self) -> Option<User> {
        self.state.read().await.principal().cloned()
    }

    pub async fn token(&self) -> Option<CredentialToken> {
        self.state.read().await.token().cloned()
    }

    /// Read the persisted principal and token
    ///
    /// The session becomes authenticated only when both entries exist and
    /// the principal decodes; anything else resolves to anonymous.
    pub async fn restore(&self) -> SessionState {
        *self.state.write().await = SessionState::Restoring;

        let restored = match self.read_persisted().await {
            Ok(Some((principal, token))) => {
                tracing::debug!(user_id = principal.id, "Restored session");
                SessionState::Authenticated { principal, token }
            }
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                tracing::warn!("Ignoring unreadable persisted session: {}", e);
                SessionState::Anonymous
            }
        };

        *self.state.write().await = restored.clone();
        restored
    }

    async fn read_persisted(&self) -> Result<Option<(User, CredentialToken)>, StorageError> {
        let user = self.store.get(USER_KEY).await?;
        let auth = self.store.get(AUTH_KEY).await?;

        match (user, auth) {
            (Some(user), Some(auth)) => {
                let principal: User = serde_json::from_str(&user)?;
                Ok(Some((principal, CredentialToken::from_header_value(auth))))
            }
            _ => Ok(None),
        }
    }

    /// Authenticate and, for administrators only, persist the session
    ///
    /// On any failure nothing is written and a previous session stays as it was.
    pub async fn login(
        &self,
        authenticator: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> Result<User, LoginError> {
        let response = authenticator
            .authenticate(email, password)
            .await
            .map_err(|e| {
                tracing::warn!(email, "Login request failed: {}", e);
                LoginError::Failed(e)
            })?;

        let principal = match response {
            LoginResponse {
                success: true,
                user: Some(user),
                ..
            } => user,
            _ => {
                tracing::warn!(email, "Login rejected by backend");
                return Err(LoginError::InvalidCredentials);
            }
        };

        if !principal.role.is_admin() {
            tracing::warn!(
                email,
                role = principal.role.as_str(),
                "Login refused for non-administrator"
            );
            return Err(LoginError::InsufficientPermissions);
        }

        let token = CredentialToken::basic(email, password);
        let serialized = serde_json::to_string(&principal).map_err(StorageError::from)?;
        self.store
            .set_many(&[(USER_KEY, serialized.as_str()), (AUTH_KEY, token.header_value())])
            .await?;

        *self.state.write().await = SessionState::Authenticated {
            principal: principal.clone(),
            token,
        };

        tracing::info!(user_id = principal.id, "Signed in");
        Ok(principal)
    }

    /// Forget the session, in memory and on disk
    pub async fn logout(&self) {
        self.clear().await;
        tracing::info!("Signed out");
    }

    /// Tear the session down after the backend rejected its credentials
    pub async fn expire(&self) {
        self.clear().await;
        tracing::warn!("Session expired; credentials cleared");
    }

    async fn clear(&self) {
        for key in [USER_KEY, AUTH_KEY] {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(key, "Failed to remove persisted entry: {}", e);
            }
        }
        *self.state.write().await = SessionState::Anonymous;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
