//! Administrator accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Envelope;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Superadmin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Superadmin => "Super Admin",
        }
    }
}

/// Administrator account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminUser {
    pub fn is_superadmin(&self) -> bool {
        self.role == Role::Superadmin
    }

    /// Avatar letter, "A" when the name is blank.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "A".to_string())
    }

    /// Whether the delete control is offered for `self` to `viewer`.
    ///
    /// Superadmins are never deletable here and nobody may delete themself.
    /// The backend enforces the same rules; this only hides the button.
    pub fn deletable_by(&self, viewer: Option<&AdminUser>) -> bool {
        !self.is_superadmin() && viewer.map_or(true, |v| v.id != self.id)
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Body of `PUT /auth/update-profile`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.new_password.is_none()
    }
}

/// Reply of `GET /auth/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for MeResponse {
    fn success(&self) -> bool {
        // a success without a user is still unauthenticated
        self.success && self.user.is_some()
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Reply of `PUT /auth/update-profile`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<AdminUser>,
}

impl Envelope for UpdateProfileResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Reply of `GET /auth/users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<AdminUser>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for UsersResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn user(id: &str, username: &str, role: Role) -> AdminUser {
        AdminUser {
            id: id.into(),
            username: username.into(),
            name: format!("{username} name"),
            role,
            created_at: None,
        }
    }

    #[test]
    fn test_delete_hidden_for_self() {
        let me = user("u1", "rina", Role::Admin);
        assert!(!me.deletable_by(Some(&me)));
    }

    #[test]
    fn test_delete_hidden_for_superadmin() {
        let me = user("u1", "rina", Role::Superadmin);
        let root = user("u0", "root", Role::Superadmin);
        assert!(!root.deletable_by(Some(&me)));
        assert!(!root.deletable_by(None));
    }

    #[test]
    fn test_delete_shown_for_other_admins() {
        let me = user("u1", "rina", Role::Superadmin);
        let other = user("u2", "budi", Role::Admin);
        assert!(other.deletable_by(Some(&me)));
    }

    #[test]
    fn test_decode_me_response() {
        let json = r#"{
            "success": true,
            "user": {"_id": "u1", "username": "root", "name": "Root", "role": "superadmin",
                     "createdAt": "2026-01-05T02:00:00.000Z"}
        }"#;
        let resp: MeResponse = serde_json::from_str(json).unwrap();
        let user = resp.clone().into_result().unwrap().user.unwrap();
        assert!(user.is_superadmin());
        assert_eq!(user.role.label(), "Super Admin");
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_me_without_user_is_rejected() {
        let resp: MeResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(resp.into_result().is_err());
        let resp: MeResponse =
            serde_json::from_str(r#"{"success": false, "message": "Unauthorized"}"#).unwrap();
        assert!(resp.into_result().is_err());
    }

    #[test]
    fn test_update_profile_omits_absent_fields() {
        let body = UpdateProfileRequest {
            name: Some("Rina".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"name":"Rina"}"#);

        let body = UpdateProfileRequest {
            name: None,
            current_password: Some("old".into()),
            new_password: Some("secret1".into()),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"currentPassword":"old","newPassword":"secret1"}"#
        );
    }

    #[test]
    fn test_initial_fallback() {
        let mut u = user("u1", "rina", Role::Admin);
        assert_eq!(u.initial(), "R");
        u.name = " ".into();
        assert_eq!(u.initial(), "A");
    }
}
