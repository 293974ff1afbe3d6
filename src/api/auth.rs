use std::sync::Arc;

use super::transport::Transport;
use crate::errors::Result;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::models::auth::responses::AuthResponse;
use crate::models::users::entities::User;

/// Authentication endpoints. Successful calls update the session, the way
/// the original auth service mirrored responses into local storage.
pub struct AuthApi {
    transport: Arc<Transport>,
}

impl AuthApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let auth: AuthResponse = self.transport.post_data("auth/login", credentials).await?;
        self.transport.session().start(auth.clone()).await?;
        Ok(auth)
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse> {
        let auth: AuthResponse = self.transport.post_data("auth/register", payload).await?;
        self.transport.session().start(auth.clone()).await?;
        Ok(auth)
    }

    /// Refresh the profile of the logged-in user.
    pub async fn profile(&self) -> Result<User> {
        let user: User = self.transport.get_data("auth/profile", &[]).await?;
        self.transport.session().set_user(user.clone()).await?;
        Ok(user)
    }

    /// Client-side logout: the backend keeps no session state.
    pub async fn logout(&self) -> Result<()> {
        self.transport.session().clear().await
    }
}
