use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public part of the user returned to the client. The email and the
/// password hash are never echoed back.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_exposes_only_id_and_name() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "Ann".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "name"]);
    }

    #[test]
    fn auth_response_shape() {
        let res = AuthResponse {
            token: "abc".into(),
            user: PublicUser {
                id: Uuid::new_v4(),
                name: "Ann".into(),
            },
        };
        let value = serde_json::to_value(&res).unwrap();
        assert!(value.get("token").is_some());
        assert_eq!(value["user"]["name"], "Ann");
        assert!(value["user"].get("email").is_none());
    }
}
