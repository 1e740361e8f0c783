//! Auth DTOs

use serde::{Deserialize, Serialize};

pub const REGISTERED: &str = "User registered successfully";

/// Login request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body carrying only a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
