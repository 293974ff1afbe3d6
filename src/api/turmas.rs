use std::ops::Deref;
use std::sync::Arc;

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::alunos::entities::Aluno;
use crate::models::turmas::entities::Turma;
use crate::models::turmas::requests::TurmaInput;

pub struct TurmasApi {
    resource: ResourceClient<Turma, TurmaInput>,
}

impl TurmasApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "turmas"),
        }
    }

    /// Roster of a turma.
    pub async fn alunos(&self, id: i64) -> Result<Vec<Aluno>> {
        self.transport()
            .get_data(&format!("turmas/{id}/alunos"), &[])
            .await
    }
}

impl Deref for TurmasApi {
    type Target = ResourceClient<Turma, TurmaInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
