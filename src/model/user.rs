//! Data models for platform accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Account tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    #[default]
    Free,
    Premium,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Free => "FREE",
            AccountType::Premium => "PREMIUM",
        }
    }

    /// The tier an admin switches this account to
    pub fn toggled(&self) -> AccountType {
        match self {
            AccountType::Free => AccountType::Premium,
            AccountType::Premium => AccountType::Free,
        }
    }
}

/// A platform account as returned by the auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub premium_expired_at: Option<DateTime<Utc>>,
    #[serde(rename = "phone_number", default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub is_request_change_to_premium: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        !self.id.is_empty() && self.role == Role::Admin
    }

    pub fn premium_expiry_label(&self) -> String {
        match self.premium_expired_at {
            Some(at) => at.format("%Y-%m-%d").to_string(),
            None => "-".to_string(),
        }
    }
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Payload of a successful login
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_backend_shape() {
        let json = r#"{
            "_id": "u1",
            "email": "admin@example.com",
            "name": "Admin",
            "role": "ADMIN",
            "accountType": "PREMIUM",
            "premiumExpiredAt": "2025-03-01T00:00:00.000Z",
            "phone_number": "0123",
            "address": "Street 1",
            "score": 12,
            "__v": 0,
            "createdAt": "2024-01-01T10:00:00.000Z"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.account_type, AccountType::Premium);
        assert_eq!(user.phone_number, "0123");
        assert_eq!(user.premium_expiry_label(), "2025-03-01");
        assert!(!user.is_request_change_to_premium);
        assert!(user.is_admin());
    }

    #[test]
    fn test_user_without_id_is_not_admin() {
        let user = User {
            role: Role::Admin,
            ..User::default()
        };
        assert!(!user.is_admin());
    }

    #[test]
    fn test_account_type_toggle() {
        assert_eq!(AccountType::Free.toggled(), AccountType::Premium);
        assert_eq!(AccountType::Premium.toggled(), AccountType::Free);
    }
}
