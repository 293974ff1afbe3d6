use serde::{Deserialize, Serialize};

use crate::models::periodos::entities::PeriodoLetivo;
use crate::models::vinculos::entities::TurmaProfessor;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avaliacao {
    pub id: i64,
    pub id_turma_professor: i64,
    pub id_periodo_letivo: i64,
    pub titulo: String,
    // Kind: Prova / Trabalho / Seminario...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    pub data_aplicacao: String,
    // Weight applied in the weighted average, backend-defaulted to 1
    pub peso: f64,
    // Attached exam sheet metadata; the binary itself lives behind
    // GET /avaliacoes/{id}/arquivo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_arquivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_arquivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tem_arquivo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turma_professor: Option<TurmaProfessor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periodo_letivo: Option<PeriodoLetivo>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<AvaliacaoCount>,
}

impl Avaliacao {
    /// Whether an exam sheet is attached server-side.
    pub fn possui_arquivo(&self) -> bool {
        self.tem_arquivo.unwrap_or(false) || self.nome_arquivo.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvaliacaoCount {
    #[serde(default)]
    pub notas: Option<i64>,
}
