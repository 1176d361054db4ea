use async_trait::async_trait;

use crate::error::AuthError;
use crate::user::{Credentials, ProfileUpdate, Session, User};

/// Identity backend contract.
///
/// Implementations own the session: at most one user is signed in per provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError>;

    /// End the current session. Signing out with no session is not an error.
    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Merge `update` into the signed-in user's profile.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, AuthError>;
}

/// Stand-in used when no identity backend is configured.
///
/// Every call fails with [`AuthError::NotConfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredAuthProvider;

#[async_trait]
impl AuthProvider for UnconfiguredAuthProvider {
    async fn sign_in(&self, _credentials: Credentials) -> Result<Session, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Err(AuthError::NotConfigured)
    }

    async fn update_profile(&self, _update: ProfileUpdate) -> Result<User, AuthError> {
        Err(AuthError::NotConfigured)
    }
}
