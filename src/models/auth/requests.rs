use serde::Serialize;

use crate::models::users::entities::Role;

// Login credentials
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// E-mail address used as the login
    pub email: String,
    /// Plain password, sent over TLS only
    pub senha: String,
}

// Self-registration payload; role is backend-defaulted when omitted
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
