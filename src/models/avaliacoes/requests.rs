use serde::Serialize;

// Create/update payload; also flattened into multipart fields when an
// arquivo accompanies the submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvaliacaoInput {
    pub id_turma_professor: i64,
    pub id_periodo_letivo: i64,
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    pub data_aplicacao: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso: Option<f64>,
}

impl AvaliacaoInput {
    /// Multipart form fields in the order the backend reads them.
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("idTurmaProfessor", self.id_turma_professor.to_string()),
            ("idPeriodoLetivo", self.id_periodo_letivo.to_string()),
            ("titulo", self.titulo.clone()),
            ("dataAplicacao", self.data_aplicacao.clone()),
        ];
        if let Some(tipo) = &self.tipo {
            fields.push(("tipo", tipo.clone()));
        }
        if let Some(peso) = self.peso {
            fields.push(("peso", peso.to_string()));
        }
        fields
    }
}

// A file picked client-side, pending upload alongside the form fields.
// Produced by the attachment state machine after validation.
#[derive(Debug, Clone)]
pub struct ArquivoSelecionado {
    pub nome: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}
