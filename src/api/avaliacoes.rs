use std::ops::Deref;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use super::resource::ResourceClient;
use super::transport::Transport;
use crate::errors::Result;
use crate::models::avaliacoes::entities::Avaliacao;
use crate::models::avaliacoes::requests::{ArquivoSelecionado, AvaliacaoInput};
use crate::models::common::{ListParams, PaginatedList};

pub struct AvaliacoesApi {
    resource: ResourceClient<Avaliacao, AvaliacaoInput>,
}

impl AvaliacoesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            resource: ResourceClient::new(transport, "avaliacoes"),
        }
    }

    /// Avaliacoes of one turma-professor-disciplina vinculo.
    pub async fn find_by_vinculo(
        &self,
        id_turma_professor: i64,
        params: &ListParams,
    ) -> Result<PaginatedList<Avaliacao>> {
        self.transport()
            .get_list(
                &format!("avaliacoes/vinculo/{id_turma_professor}"),
                &params.to_query(),
            )
            .await
    }

    /// Create through the multipart route, with or without an attached
    /// exam sheet. The arquivo must already have passed client-side
    /// validation (see the attachment state machine).
    pub async fn create_with_arquivo(
        &self,
        input: &AvaliacaoInput,
        arquivo: Option<&ArquivoSelecionado>,
    ) -> Result<Avaliacao> {
        let form = Self::multipart_form(input, arquivo)?;
        self.transport().post_multipart("avaliacoes", form).await
    }

    pub async fn update_with_arquivo(
        &self,
        id: i64,
        input: &AvaliacaoInput,
        arquivo: Option<&ArquivoSelecionado>,
    ) -> Result<Avaliacao> {
        let form = Self::multipart_form(input, arquivo)?;
        self.transport()
            .put_multipart(&format!("avaliacoes/{id}"), form)
            .await
    }

    /// Download the attached exam sheet.
    pub async fn download_arquivo(&self, id: i64) -> Result<Vec<u8>> {
        self.transport()
            .get_bytes(&format!("avaliacoes/{id}/arquivo"))
            .await
    }

    /// Remove the attached exam sheet, keeping the avaliacao itself.
    pub async fn remove_arquivo(&self, id: i64) -> Result<()> {
        self.transport()
            .delete_empty(&format!("avaliacoes/{id}/arquivo"))
            .await
    }

    fn multipart_form(
        input: &AvaliacaoInput,
        arquivo: Option<&ArquivoSelecionado>,
    ) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in input.to_form_fields() {
            form = form.text(name, value);
        }
        if let Some(arquivo) = arquivo {
            let part = Part::bytes(arquivo.bytes.clone())
                .file_name(arquivo.nome.clone())
                .mime_str(&arquivo.content_type)?;
            form = form.part("arquivo", part);
        }
        Ok(form)
    }
}

impl Deref for AvaliacoesApi {
    type Target = ResourceClient<Avaliacao, AvaliacaoInput>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}
