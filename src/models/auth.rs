use serde::{Deserialize, Serialize};

use super::wire::opt_string_or_number;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Anything that is not exactly `ADMIN` is a regular user
    pub fn parse(value: &str) -> Self {
        if value == "ADMIN" {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }

    /// Where a freshly signed-in user lands
    pub fn landing_route(&self) -> Route {
        match self {
            Role::Admin => Route::Admin,
            Role::User => Route::Home,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in user. Absent means logged out; there is no partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/signin`. Success and failure share the shape,
/// so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub jwt: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignInReply {
    pub status: u16,
    pub body: LoginResponse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub session: Session,
    pub redirect: Route,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_fall_back_to_user() {
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("USER"), Role::User);
        assert_eq!(Role::parse("admin"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
    }

    #[test]
    fn login_response_accepts_numeric_user_id() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"jwt":"abc","userId":7,"role":"ADMIN"}"#).unwrap();
        assert_eq!(body.user_id.as_deref(), Some("7"));
        assert_eq!(body.role.as_deref(), Some("ADMIN"));
        assert_eq!(body.message, None);
    }

    #[test]
    fn failed_login_body_only_has_message() {
        let body: LoginResponse = serde_json::from_str(r#"{"message":"Bad credentials"}"#).unwrap();
        assert_eq!(body.jwt, None);
        assert_eq!(body.message.as_deref(), Some("Bad credentials"));
    }

    #[test]
    fn session_roundtrips_role_as_text() {
        let session = Session { user_id: "3".into(), role: Role::Admin };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"ADMIN\""));
    }
}
