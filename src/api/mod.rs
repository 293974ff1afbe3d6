//! Typed clients for the SIGEA REST backend.
//!
//! One client per entity, all sharing a single [`Transport`] that injects
//! the bearer token and unwraps the response envelope.

pub mod alunos;
pub mod auth;
pub mod avaliacoes;
pub mod escolas;
pub mod notas;
pub mod regras;
pub mod relatorios;
pub mod resource;
pub mod transport;
pub mod turmas;
pub mod vinculos;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::errors::Result;
use crate::models::coordenadores::entities::Coordenador;
use crate::models::coordenadores::requests::CoordenadorInput;
use crate::models::disciplinas::entities::Disciplina;
use crate::models::disciplinas::requests::DisciplinaInput;
use crate::models::periodos::entities::PeriodoLetivo;
use crate::models::periodos::requests::PeriodoLetivoInput;
use crate::models::professores::entities::Professor;
use crate::models::professores::requests::ProfessorInput;
use crate::session::Session;

pub use alunos::AlunosApi;
pub use auth::AuthApi;
pub use avaliacoes::AvaliacoesApi;
pub use escolas::EscolasApi;
pub use notas::NotasApi;
pub use regras::RegrasApi;
pub use relatorios::RelatoriosApi;
pub use resource::ResourceClient;
pub use transport::Transport;
pub use turmas::TurmasApi;
pub use vinculos::VinculosApi;

/// Facade over every resource client, sharing one transport and session.
pub struct ApiClient {
    pub auth: AuthApi,
    pub escolas: EscolasApi,
    pub turmas: TurmasApi,
    pub alunos: AlunosApi,
    pub professores: ResourceClient<Professor, ProfessorInput>,
    pub disciplinas: ResourceClient<Disciplina, DisciplinaInput>,
    pub coordenadores: ResourceClient<Coordenador, CoordenadorInput>,
    pub periodos: ResourceClient<PeriodoLetivo, PeriodoLetivoInput>,
    pub vinculos: VinculosApi,
    pub avaliacoes: AvaliacoesApi,
    pub notas: NotasApi,
    pub regras: RegrasApi,
    pub relatorios: RelatoriosApi,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<Session>) -> Result<Self> {
        let transport = Arc::new(Transport::new(config, session)?);
        Ok(Self {
            auth: AuthApi::new(transport.clone()),
            escolas: EscolasApi::new(transport.clone()),
            turmas: TurmasApi::new(transport.clone()),
            alunos: AlunosApi::new(transport.clone()),
            professores: ResourceClient::new(transport.clone(), "professores"),
            disciplinas: ResourceClient::new(transport.clone(), "disciplinas"),
            coordenadores: ResourceClient::new(transport.clone(), "coordenadores"),
            periodos: ResourceClient::new(transport.clone(), "periodos"),
            vinculos: VinculosApi::new(transport.clone()),
            avaliacoes: AvaliacoesApi::new(transport.clone()),
            notas: NotasApi::new(transport.clone()),
            regras: RegrasApi::new(transport.clone()),
            relatorios: RelatoriosApi::new(transport),
        })
    }
}
