use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoLetivoInput {
    pub ano: i32,
    pub etapa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<String>,
}
