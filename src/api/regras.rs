use std::ops::Deref;
use std::sync::Arc;

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::regras::entities::RegraAprovacao;
use crate::models::regras::requests::RegraAprovacaoInput;

pub struct RegrasApi {
    resource: ResourceClient<RegraAprovacao, RegraAprovacaoInput>,
}

impl RegrasApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "regras"),
        }
    }

    /// Rules of one school across years, feeding the minimum-average
    /// resolution for its reports.
    pub async fn find_by_escola(&self, id_escola: i64) -> Result<Vec<RegraAprovacao>> {
        self.transport()
            .get_data(&format!("regras/escola/{id_escola}"), &[])
            .await
    }
}

impl Deref for RegrasApi {
    type Target = ResourceClient<RegraAprovacao, RegraAprovacaoInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
