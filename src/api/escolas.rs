use std::ops::Deref;
use std::sync::Arc;

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::coordenadores::entities::Coordenador;
use crate::models::escolas::entities::Escola;
use crate::models::escolas::requests::EscolaInput;
use crate::models::professores::entities::Professor;
use crate::models::turmas::entities::Turma;

pub struct EscolasApi {
    resource: ResourceClient<Escola, EscolaInput>,
}

impl EscolasApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "escolas"),
        }
    }

    pub async fn turmas(&self, id: i64) -> Result<Vec<Turma>> {
        self.transport()
            .get_data(&format!("escolas/{id}/turmas"), &[])
            .await
    }

    pub async fn professores(&self, id: i64) -> Result<Vec<Professor>> {
        self.transport()
            .get_data(&format!("escolas/{id}/professores"), &[])
            .await
    }

    pub async fn coordenadores(&self, id: i64) -> Result<Vec<Coordenador>> {
        self.transport()
            .get_data(&format!("escolas/{id}/coordenadores"), &[])
            .await
    }
}

impl Deref for EscolasApi {
    type Target = ResourceClient<Escola, EscolaInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
