use serde::{Deserialize, Serialize};

// Academic term (bimester/semester) that scopes avaliacoes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoLetivo {
    pub id: i64,
    pub ano: i32,
    // Stage within the year, e.g. "1º Bimestre"
    pub etapa: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<String>,
}
