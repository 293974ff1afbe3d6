use std::ops::Deref;
use std::sync::Arc;

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::alunos::entities::Aluno;
use crate::models::alunos::requests::AlunoInput;
use crate::models::notas::entities::Nota;

pub struct AlunosApi {
    resource: ResourceClient<Aluno, AlunoInput>,
}

impl AlunosApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "alunos"),
        }
    }

    pub async fn find_by_matricula(&self, matricula: &str) -> Result<Aluno> {
        self.transport()
            .get_data(&format!("alunos/matricula/{matricula}"), &[])
            .await
    }

    pub async fn notas(&self, id: i64) -> Result<Vec<Nota>> {
        self.transport()
            .get_data(&format!("alunos/{id}/notas"), &[])
            .await
    }
}

impl Deref for AlunosApi {
    type Target = ResourceClient<Aluno, AlunoInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
