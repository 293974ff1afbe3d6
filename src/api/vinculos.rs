use std::ops::Deref;
use std::sync::Arc;

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::common::{ListParams, PaginatedList};
use crate::models::vinculos::entities::TurmaProfessor;
use crate::models::vinculos::requests::TurmaProfessorInput;

pub struct VinculosApi {
    resource: ResourceClient<TurmaProfessor, TurmaProfessorInput>,
}

impl VinculosApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "vinculos"),
        }
    }

    pub async fn find_by_professor(
        &self,
        id_professor: i64,
        params: &ListParams,
    ) -> Result<PaginatedList<TurmaProfessor>> {
        self.transport()
            .get_list(&format!("vinculos/professor/{id_professor}"), &params.to_query())
            .await
    }

    pub async fn find_by_turma(
        &self,
        id_turma: i64,
        params: &ListParams,
    ) -> Result<PaginatedList<TurmaProfessor>> {
        self.transport()
            .get_list(&format!("vinculos/turma/{id_turma}"), &params.to_query())
            .await
    }
}

impl Deref for VinculosApi {
    type Target = ResourceClient<TurmaProfessor, TurmaProfessorInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
