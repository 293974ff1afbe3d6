use std::sync::Arc;

use httpmock::MockServer;

use sigea_client::api::ApiClient;
use sigea_client::config::ApiConfig;
use sigea_client::models::auth::responses::AuthResponse;
use sigea_client::models::users::entities::{Role, User};
use sigea_client::session::Session;
use sigea_client::session::store::MemorySessionStore;

pub fn user(role: Role) -> User {
    User {
        id: 1,
        nome: "Maria Souza".to_string(),
        email: "maria@escola.gov.br".to_string(),
        role,
        id_professor: None,
        id_coordenador: None,
        id_aluno: None,
        professor: None,
        coordenador: None,
        aluno: None,
    }
}

/// Client wired to the mock server with an in-memory session.
pub fn client(server: &MockServer) -> (ApiClient, Arc<Session>) {
    let session = Arc::new(Session::new(Arc::new(MemorySessionStore::new())));
    let config = ApiConfig {
        base_url: server.base_url(),
        timeout_secs: 0,
    };
    let api = ApiClient::new(&config, session.clone()).expect("client should build");
    (api, session)
}

/// Same, but already authenticated with `token`.
pub async fn logged_in_client(
    server: &MockServer,
    role: Role,
    token: &str,
) -> (ApiClient, Arc<Session>) {
    let (api, session) = client(server);
    session
        .start(AuthResponse {
            token: token.to_string(),
            user: user(role),
        })
        .await
        .expect("session start");
    (api, session)
}
