//! Demo identity backend: accepts any filled-in credentials.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use stockwise_core::UserId;

use crate::error::AuthError;
use crate::limiter::AttemptLimiter;
use crate::provider::AuthProvider;
use crate::roles::Role;
use crate::user::{Credentials, ProfileUpdate, Session, User};

/// Simulated round-trip to the identity backend.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(1000);

/// In-memory provider for demos and tests.
///
/// Any non-empty email and password signs in. The role is the one picked on the
/// form, else inferred from the email. Attempts are rate limited per provider.
#[derive(Debug)]
pub struct DemoAuthProvider {
    latency: Duration,
    limiter: Mutex<AttemptLimiter>,
    session: Mutex<Option<Session>>,
}

impl DemoAuthProvider {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LOGIN_LATENCY,
            limiter: Mutex::new(AttemptLimiter::default()),
            session: Mutex::new(None),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_limiter(mut self, limiter: AttemptLimiter) -> Self {
        self.limiter = Mutex::new(limiter);
        self
    }

    fn session_slot(&self) -> std::sync::MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for DemoAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for DemoAuthProvider {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        tokio::time::sleep(self.latency).await;

        // Only completed round-trips count against the limiter.
        let admitted = self
            .limiter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .try_acquire(tokio::time::Instant::now());
        if let Err(retry_after_secs) = admitted {
            tracing::warn!(retry_after_secs, "sign-in rate limited");
            return Err(AuthError::RateLimited { retry_after_secs });
        }

        let role = credentials
            .role
            .unwrap_or_else(|| Role::infer_from_email(&credentials.email));
        let session = Session {
            user: User::from_email(UserId::new(), &credentials.email, role),
            signed_in_at: Utc::now(),
        };

        tracing::info!(user_id = %session.user.id, %role, "signed in");
        *self.session_slot() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(session) = self.session_slot().take() {
            tracing::info!(user_id = %session.user.id, "signed out");
        }
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.session_slot().clone())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<User, AuthError> {
        let mut slot = self.session_slot();
        let session = slot.as_mut().ok_or(AuthError::NoSession)?;
        update.apply_to(&mut session.user);
        tracing::info!(user_id = %session.user.id, "profile updated");
        Ok(session.user.clone())
    }
}
