use serde::{Deserialize, Serialize};

use crate::profile::repo::Profile;

/// Request body for registration. Fields default to empty so presence is
/// checked by the handler (400) instead of the JSON layer (422).
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Request body for sign-in.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned after registration or sign-in.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Profile,
}

#[derive(Debug, Serialize)]
pub struct SignoutResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_defaults_missing_fields_to_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(req.email, "a@x.com");
        assert!(req.password.is_empty());
        assert!(req.name.is_empty());
    }

    #[test]
    fn auth_response_nests_the_public_user() {
        let response = AuthResponse {
            token: "opaque".into(),
            user: Profile {
                id: uuid::Uuid::new_v4(),
                email: "a@x.com".into(),
                name: "A".into(),
                entries: 0,
                joined_at: time::OffsetDateTime::UNIX_EPOCH,
                image_url: String::new(),
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"token\":\"opaque\""));
        assert!(json.contains("a@x.com"));
        assert!(json.contains("entries"));
    }
}
