use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaInput {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carga_horaria: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_conhecimento: Option<String>,
}
