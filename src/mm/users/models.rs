//! User data models

use serde::{Deserialize, Serialize};

/// User as returned by the server
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub auth_service: String,
    /// Creation time in milliseconds since the epoch
    #[serde(default)]
    pub create_at: i64,
}

/// Payload for creating a user
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub locale: String,
}

/// Payload for replacing a user's roles
#[derive(Serialize, Debug)]
pub struct UpdateRolesRequest<'a> {
    pub roles: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "id": "u1",
            "create_at": 1700000000000,
            "update_at": 1700000000000,
            "delete_at": 0,
            "username": "alice",
            "auth_data": "",
            "auth_service": "",
            "email": "alice@example.com",
            "email_verified": true,
            "nickname": "al",
            "first_name": "Alice",
            "last_name": "Liddell",
            "position": "",
            "roles": "system_user system_admin",
            "locale": "en",
            "timezone": {"useAutomaticTimezone": "true"}
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.create_at, 1700000000000);
        assert_eq!(user.roles, "system_user system_admin");
    }

    #[test]
    fn test_new_user_skips_empty_optional_fields() {
        let new_user = NewUser {
            email: "bob@example.com".to_string(),
            username: "bob".to_string(),
            password: "Password1".to_string(),
            locale: "fr".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&new_user).unwrap();
        assert_eq!(value["email"], "bob@example.com");
        assert_eq!(value["locale"], "fr");
        assert!(value.get("nickname").is_none());
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn test_update_roles_request_shape() {
        let value = serde_json::to_value(UpdateRolesRequest {
            roles: "system_user system_admin",
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"roles": "system_user system_admin"}));
    }
}
