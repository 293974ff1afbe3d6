use super::Session;
use crate::errors::{Result, SigeaError};
use crate::models::users::entities::{Role, User};

/// Require an authenticated user.
pub fn require_authenticated(session: &Session) -> Result<User> {
    session
        .user()
        .ok_or_else(|| SigeaError::authentication("Not authenticated"))
}

/// Require one of the allowed roles, e.g. before composing a restricted
/// screen. The backend still enforces its own checks.
pub fn require_role(session: &Session, allowed: &[Role]) -> Result<User> {
    let user = require_authenticated(session)?;
    if allowed.contains(&user.role) {
        Ok(user)
    } else {
        Err(SigeaError::authorization(format!(
            "Role {} is not allowed here",
            user.role
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::auth::responses::AuthResponse;
    use crate::session::store::MemorySessionStore;

    fn user(role: Role) -> User {
        User {
            id: 1,
            nome: "Ana".to_string(),
            email: "ana@escola.gov.br".to_string(),
            role,
            id_professor: None,
            id_coordenador: None,
            id_aluno: None,
            professor: None,
            coordenador: None,
            aluno: None,
        }
    }

    async fn session_with(role: Role) -> Session {
        let session = Session::new(Arc::new(MemorySessionStore::new()));
        session
            .start(AuthResponse {
                token: "tok".to_string(),
                user: user(role),
            })
            .await
            .unwrap();
        session
    }

    #[tokio::test]
    async fn test_require_role_allows_member() {
        let session = session_with(Role::Coordenador).await;
        assert!(require_role(&session, Role::coordenacao_roles()).is_ok());
    }

    #[tokio::test]
    async fn test_require_role_rejects_outsider() {
        let session = session_with(Role::Professor).await;
        let err = require_role(&session, Role::admin_roles()).unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[tokio::test]
    async fn test_require_authenticated_without_session() {
        let session = Session::new(Arc::new(MemorySessionStore::new()));
        assert!(require_authenticated(&session).is_err());
    }
}
