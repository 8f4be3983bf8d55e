use serde::{Deserialize, Serialize};

pub const ROLE_DOCTOR: &str = "doctor";
pub const ROLE_RECEPTIONIST: &str = "receptionist";

/// Staff account as exposed by `GET /users`; the password hash stays in the
/// database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String, // e.g., "doctor", "receptionist"
}

/// Account creation input, password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilter {
    #[serde(default, deserialize_with = "crate::models::query::empty_as_none")]
    pub role: Option<String>,
}
