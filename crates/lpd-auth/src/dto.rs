use serde::Deserialize;
use serde::Serialize;

/// Request bodies default every field so malformed JSON reads as an
/// empty object instead of a parse error.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LogoutRequest {
    pub token: Option<String>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub status: &'static str,
    pub token: String,
    pub username: String,
}
