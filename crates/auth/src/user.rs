use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockwise_core::UserId;

use crate::roles::Role;

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";
const FALLBACK_NAME: &str = "User";

/// The signed-in person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

impl User {
    /// Build a profile from an email address alone.
    ///
    /// The display name is the local part of the address, or "User" if that is
    /// empty; the avatar is an initials image for that name.
    pub fn from_email(id: UserId, email: &str, role: Role) -> Self {
        let name = display_name(email);
        Self {
            id,
            email: email.trim().to_string(),
            avatar: Some(avatar_url(&name)),
            name,
            role,
            phone: None,
            company: None,
            bio: None,
        }
    }
}

fn display_name(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    if local.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        local.to_string()
    }
}

pub fn avatar_url(name: &str) -> String {
    format!(
        "{AVATAR_SERVICE}?name={}&background=2563eb&color=ffffff",
        urlencoding::encode(name)
    )
}

/// Partial profile change: `None` keeps the current value.
///
/// Email, id and role are not editable from the profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn apply_to(self, user: &mut User) {
        if let Some(v) = self.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            user.name = v;
        }
        if let Some(v) = self.avatar {
            user.avatar = Some(v);
        }
        if let Some(v) = self.phone {
            user.phone = Some(v);
        }
        if let Some(v) = self.company {
            user.company = Some(v);
        }
        if let Some(v) = self.bio {
            user.bio = Some(v);
        }
    }
}

/// A signed-in user and when they signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    pub signed_in_at: DateTime<Utc>,
}

/// Sign-in form. `role` is the optional role picked on the login page.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Both email and password were filled in.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
