use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard role. Purely descriptive; no permission checks hang off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    #[serde(rename = "Supply Chain Manager")]
    SupplyChainManager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::SupplyChainManager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::SupplyChainManager => "Supply Chain Manager",
        }
    }

    /// Guess a role from an email address when none was chosen.
    ///
    /// "admin" anywhere in the address wins over "manager"; anything else is a
    /// supply chain manager. Matching ignores case.
    pub fn infer_from_email(email: &str) -> Role {
        let email = email.to_lowercase();
        if email.contains("admin") {
            Role::Admin
        } else if email.contains("manager") {
            Role::Manager
        } else {
            Role::SupplyChainManager
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRole(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_inferred_from_email() {
        assert_eq!(Role::infer_from_email("admin@acme.com"), Role::Admin);
        assert_eq!(Role::infer_from_email("Ops.Manager@acme.com"), Role::Manager);
        assert_eq!(Role::infer_from_email("jo@acme.com"), Role::SupplyChainManager);
        // admin beats manager
        assert_eq!(Role::infer_from_email("admin.manager@acme.com"), Role::Admin);
    }

    #[test]
    fn role_parses_its_label() {
        assert_eq!("supply chain manager".parse::<Role>(), Ok(Role::SupplyChainManager));
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_as_label() {
        let json = serde_json::to_string(&Role::SupplyChainManager).unwrap();
        assert_eq!(json, "\"Supply Chain Manager\"");
    }
}
