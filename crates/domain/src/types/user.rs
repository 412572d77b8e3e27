//! User account types
//!
//! Cached copy of the backend user record; role decides route access and
//! is immutable from the client's point of view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, fixed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
}

/// User account snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Redeemable balance; only meaningful for employees.
    #[serde(default)]
    pub points_balance: i64,
    #[serde(default)]
    pub is_first_login: bool,
    pub is_active: bool,
    #[serde(default)]
    pub preferred_language: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Partial update applied to the in-memory user snapshot.
///
/// Fields left as `None` keep their current value. Used for the local
/// patches the client applies after a server-side mutation (new balance
/// after a redemption, new phone after a profile edit).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    pub phone: Option<String>,
    pub points_balance: Option<i64>,
    pub preferred_language: Option<String>,
    pub is_first_login: Option<bool>,
}

impl UserPatch {
    /// Patch carrying only a new points balance.
    pub fn points_balance(balance: i64) -> Self {
        Self { points_balance: Some(balance), ..Self::default() }
    }

    /// Patch carrying only a new phone number.
    pub fn phone(phone: impl Into<String>) -> Self {
        Self { phone: Some(phone.into()), ..Self::default() }
    }

    /// Apply this patch to a user, returning the merged snapshot.
    pub fn apply(&self, mut user: User) -> User {
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(balance) = self.points_balance {
            user.points_balance = balance;
        }
        if let Some(language) = &self.preferred_language {
            user.preferred_language = Some(language.clone());
        }
        if let Some(first_login) = self.is_first_login {
            user.is_first_login = first_login;
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "full_name": "Li Wei",
            "email": "li.wei@example.com",
            "phone": "13800000000",
            "role": "employee",
            "points_balance": 120,
            "is_first_login": false,
            "is_active": true,
            "preferred_language": "zh",
            "created_at": "2025-01-05T08:00:00Z",
            "updated_at": "2025-06-01T08:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn role_deserializes_lowercase() {
        assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
        assert_eq!(serde_json::from_str::<Role>("\"employee\"").unwrap(), Role::Employee);
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn patch_merges_without_discarding_other_fields() {
        let user = employee();
        let patched = UserPatch::points_balance(50).apply(user.clone());
        assert_eq!(patched.points_balance, 50);
        assert_eq!(patched.full_name, user.full_name);
        assert_eq!(patched.phone, user.phone);
        assert_eq!(patched.preferred_language, user.preferred_language);
    }

    #[test]
    fn empty_patch_is_identity() {
        let user = employee();
        assert_eq!(UserPatch::default().apply(user.clone()), user);
    }
}
