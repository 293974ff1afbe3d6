use std::ops::Deref;
use std::sync::Arc;

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::common::{ListParams, PaginatedList};
use crate::models::notas::entities::Nota;
use crate::models::notas::requests::{NotaInput, NotasBatchInput};

pub struct NotasApi {
    resource: ResourceClient<Nota, NotaInput>,
}

impl NotasApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "notas"),
        }
    }

    pub async fn find_by_avaliacao(
        &self,
        id_avaliacao: i64,
        params: &ListParams,
    ) -> Result<PaginatedList<Nota>> {
        self.transport()
            .get_list(&format!("notas/avaliacao/{id_avaliacao}"), &params.to_query())
            .await
    }

    pub async fn find_by_aluno(
        &self,
        id_aluno: i64,
        params: &ListParams,
    ) -> Result<PaginatedList<Nota>> {
        self.transport()
            .get_list(&format!("notas/aluno/{id_aluno}"), &params.to_query())
            .await
    }

    /// Enter every grade of one avaliacao in a single call.
    pub async fn create_batch(&self, batch: &NotasBatchInput) -> Result<Vec<Nota>> {
        self.transport().post_data("notas/batch", batch).await
    }
}

impl Deref for NotasApi {
    type Target = ResourceClient<Nota, NotaInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
