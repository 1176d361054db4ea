//! `stockwise-auth`: the identity boundary of the dashboard.
//!
//! The dashboard talks to an [`AuthProvider`]. Two are shipped: a demo backend
//! that signs in any filled-in form, and a stub that refuses everything when no
//! backend is configured.

pub mod demo;
pub mod error;
pub mod limiter;
pub mod provider;
pub mod roles;
pub mod user;

pub use demo::{DEFAULT_LOGIN_LATENCY, DemoAuthProvider};
pub use error::AuthError;
pub use limiter::AttemptLimiter;
pub use provider::{AuthProvider, UnconfiguredAuthProvider};
pub use roles::{Role, UnknownRole};
pub use user::{Credentials, ProfileUpdate, Session, User, avatar_url};
