//! Attachment state machine for the avaliacao exam sheet.
//!
//! The only stateful widget of the original screens: a PDF can be picked
//! (validated client-side), submitted together with the form as one
//! multipart call, and later downloaded or removed.

use crate::config::UploadConfig;
use crate::errors::{Result, SigeaError};
use crate::models::avaliacoes::entities::Avaliacao;
use crate::models::avaliacoes::requests::ArquivoSelecionado;
use crate::utils::arquivo::{format_file_size, validate_pdf_magic};

/// Metadata of a file already stored behind the backend.
#[derive(Debug, Clone)]
pub struct ArquivoPersistido {
    pub nome_arquivo: String,
    pub tipo_arquivo: Option<String>,
}

/// Attachment state of one avaliacao form.
///
/// Transitions:
/// - `Nenhum -> Selecionado` on a valid pick; an invalid pick is rejected
///   and the current state stays untouched
/// - `Selecionado` is consumed by the multipart create/update call
/// - `Persistido` (from a loaded avaliacao) can be downloaded or removed
#[derive(Debug, Clone, Default)]
pub enum ArquivoProva {
    #[default]
    Nenhum,
    Selecionado(ArquivoSelecionado),
    Persistido(ArquivoPersistido),
}

impl ArquivoProva {
    /// Initial state for an avaliacao loaded from the backend.
    pub fn from_avaliacao(avaliacao: &Avaliacao) -> Self {
        match &avaliacao.nome_arquivo {
            Some(nome) => ArquivoProva::Persistido(ArquivoPersistido {
                nome_arquivo: nome.clone(),
                tipo_arquivo: avaliacao.tipo_arquivo.clone(),
            }),
            None => ArquivoProva::Nenhum,
        }
    }

    /// Validate a picked file and move to `Selecionado`.
    ///
    /// Returns the new state; on rejection the caller keeps the old state,
    /// which is exactly the no-state-change rule of the original dialog.
    pub fn selecionar(
        &self,
        nome: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
        upload: &UploadConfig,
    ) -> Result<Self> {
        let content_type = content_type.into();

        if !upload.allowed_types.iter().any(|t| t == &content_type) {
            return Err(SigeaError::file_rejected(
                "Apenas arquivos PDF são permitidos",
            ));
        }
        if bytes.len() > upload.max_size {
            return Err(SigeaError::file_rejected(format!(
                "Arquivo muito grande. Máximo permitido: {}",
                format_file_size(upload.max_size)
            )));
        }
        // The reported MIME type comes from the file extension; the magic
        // bytes are what actually identify a PDF
        if !validate_pdf_magic(&bytes) {
            return Err(SigeaError::file_rejected(
                "O conteúdo do arquivo não é um PDF válido",
            ));
        }

        Ok(ArquivoProva::Selecionado(ArquivoSelecionado {
            nome: nome.into(),
            content_type,
            bytes,
        }))
    }

    /// Drop a pending selection without touching anything persisted.
    pub fn limpar_selecao(&self) -> Self {
        match self {
            ArquivoProva::Selecionado(_) => ArquivoProva::Nenhum,
            other => other.clone(),
        }
    }

    /// The pending upload, when one is selected.
    pub fn selecionado(&self) -> Option<&ArquivoSelecionado> {
        match self {
            ArquivoProva::Selecionado(arquivo) => Some(arquivo),
            _ => None,
        }
    }

    pub fn is_nenhum(&self) -> bool {
        matches!(self, ArquivoProva::Nenhum)
    }

    pub fn is_persistido(&self) -> bool {
        matches!(self, ArquivoProva::Persistido(_))
    }

    /// Label shown next to the attachment control.
    pub fn descricao(&self) -> String {
        match self {
            ArquivoProva::Nenhum => "Nenhum arquivo".to_string(),
            ArquivoProva::Selecionado(arquivo) => {
                format!("{} ({})", arquivo.nome, format_file_size(arquivo.bytes.len()))
            }
            ArquivoProva::Persistido(arquivo) => arquivo.nome_arquivo.clone(),
        }
    }
}
