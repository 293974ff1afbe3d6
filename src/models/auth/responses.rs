use serde::{Deserialize, Serialize};

use crate::models::users::entities::User;

// Successful login/register payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
