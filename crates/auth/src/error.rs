use thiserror::Error;

/// Authentication failures.
///
/// Each kind has its own user-facing message; the `Display` text is meant for
/// logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("email or password missing")]
    MissingCredentials,

    /// Reported by a remote identity backend; the demo provider never rejects.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Reported by a remote identity backend.
    #[error("email address not confirmed")]
    EmailNotConfirmed,

    /// Reported by a remote identity backend.
    #[error("account disabled")]
    AccountDisabled,

    #[error("too many sign-in attempts, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("no active session")]
    NoSession,

    #[error("authentication backend not configured")]
    NotConfigured,

    #[error("sign-in cancelled")]
    Cancelled,
}

impl AuthError {
    /// Message shown to the person at the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::MissingCredentials => "Please enter both email and password".to_string(),
            AuthError::InvalidCredentials => "Invalid credentials. Please try again.".to_string(),
            AuthError::EmailNotConfirmed => {
                "Please confirm your email address before signing in.".to_string()
            }
            AuthError::AccountDisabled => {
                "This account has been disabled. Contact your administrator.".to_string()
            }
            AuthError::RateLimited { retry_after_secs } => format!(
                "Too many sign-in attempts. Please wait {retry_after_secs} seconds and try again."
            ),
            AuthError::NoSession => "You are not signed in.".to_string(),
            AuthError::NotConfigured => {
                "Authentication is not configured. Set the auth URL and key, or enable demo sign-in."
                    .to_string()
            }
            AuthError::Cancelled => "Sign-in was cancelled.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_message() {
        let all = [
            AuthError::MissingCredentials,
            AuthError::InvalidCredentials,
            AuthError::EmailNotConfirmed,
            AuthError::AccountDisabled,
            AuthError::RateLimited { retry_after_secs: 30 },
            AuthError::NoSession,
            AuthError::NotConfigured,
            AuthError::Cancelled,
        ];
        let mut messages: Vec<_> = all.iter().map(AuthError::user_message).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn rate_limit_message_mentions_wait() {
        let msg = AuthError::RateLimited { retry_after_secs: 42 }.user_message();
        assert!(msg.contains("42 seconds"));
    }
}
