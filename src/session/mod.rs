//! Session and role state.
//!
//! Holds the bearer token and the cached user profile, persisted as exactly
//! two entries in a local key-value store. Hydrated once at startup and
//! cleared on logout or on any 401 from the backend.

pub mod guard;
pub mod store;

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::errors::Result;
use crate::models::auth::responses::AuthResponse;
use crate::models::users::entities::{Role, User};
use store::SessionStore;

pub const TOKEN_KEY: &str = "sigea_token";
pub const USER_KEY: &str = "sigea_user";

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

pub struct Session {
    state: RwLock<SessionState>,
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            store,
        }
    }

    /// Load token and profile from the persisted store.
    ///
    /// A corrupt profile entry is discarded instead of failing startup.
    pub async fn hydrate(&self) -> Result<()> {
        let token = self.store.get(TOKEN_KEY).await?;
        let user = match self.store.get(USER_KEY).await? {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    debug!("Discarding unreadable stored profile: {e}");
                    self.store.remove(USER_KEY).await?;
                    None
                }
            },
            None => None,
        };

        let mut state = self.state.write().expect("session state poisoned");
        state.token = token;
        state.user = user;
        Ok(())
    }

    /// Begin a session after a successful login/register.
    pub async fn start(&self, auth: AuthResponse) -> Result<()> {
        self.store.set(TOKEN_KEY, &auth.token).await?;
        self.store
            .set(USER_KEY, &serde_json::to_string(&auth.user)?)
            .await?;

        let mut state = self.state.write().expect("session state poisoned");
        state.token = Some(auth.token);
        state.user = Some(auth.user);
        Ok(())
    }

    /// Refresh the cached profile, e.g. after GET /auth/profile.
    pub async fn set_user(&self, user: User) -> Result<()> {
        self.store
            .set(USER_KEY, &serde_json::to_string(&user)?)
            .await?;
        self.state.write().expect("session state poisoned").user = Some(user);
        Ok(())
    }

    /// Teardown: drop both persisted entries and the in-memory state.
    /// Called on logout and on any 401 response.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(USER_KEY).await?;

        let mut state = self.state.write().expect("session state poisoned");
        state.token = None;
        state.user = None;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .expect("session state poisoned")
            .token
            .clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state
            .read()
            .expect("session state poisoned")
            .user
            .clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state
            .read()
            .expect("session state poisoned")
            .user
            .as_ref()
            .map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .expect("session state poisoned")
            .token
            .is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_coordenador(&self) -> bool {
        self.role() == Some(Role::Coordenador)
    }

    pub fn is_professor(&self) -> bool {
        self.role() == Some(Role::Professor)
    }

    pub fn is_aluno(&self) -> bool {
        self.role() == Some(Role::Aluno)
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.role().map(|r| roles.contains(&r)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemorySessionStore;

    fn aluno_user() -> User {
        User {
            id: 7,
            nome: "Joao".to_string(),
            email: "joao@escola.gov.br".to_string(),
            role: Role::Aluno,
            id_professor: None,
            id_coordenador: None,
            id_aluno: Some(3),
            professor: None,
            coordenador: None,
            aluno: None,
        }
    }

    #[tokio::test]
    async fn test_start_persists_two_entries() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());
        session
            .start(AuthResponse {
                token: "abc".to_string(),
                user: aluno_user(),
            })
            .await
            .unwrap();

        assert_eq!(store.get(TOKEN_KEY).await.unwrap().as_deref(), Some("abc"));
        assert!(store.get(USER_KEY).await.unwrap().is_some());
        assert!(session.is_aluno());
    }

    #[tokio::test]
    async fn test_hydrate_restores_state() {
        let store = Arc::new(MemorySessionStore::new());
        store.set(TOKEN_KEY, "tok").await.unwrap();
        store
            .set(USER_KEY, &serde_json::to_string(&aluno_user()).unwrap())
            .await
            .unwrap();

        let session = Session::new(store);
        session.hydrate().await.unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().nome, "Joao");
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::new(store.clone());
        session
            .start(AuthResponse {
                token: "abc".to_string(),
                user: aluno_user(),
            })
            .await
            .unwrap();

        session.clear().await.unwrap();
        assert!(store.get(TOKEN_KEY).await.unwrap().is_none());
        assert!(store.get(USER_KEY).await.unwrap().is_none());
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
    }

    #[tokio::test]
    async fn test_hydrate_discards_corrupt_profile() {
        let store = Arc::new(MemorySessionStore::new());
        store.set(TOKEN_KEY, "tok").await.unwrap();
        store.set(USER_KEY, "{not json").await.unwrap();

        let session = Session::new(store.clone());
        session.hydrate().await.unwrap();
        assert!(session.user().is_none());
        assert!(store.get(USER_KEY).await.unwrap().is_none());
    }
}
