use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disciplina {
    pub id: i64,
    pub nome: String,
    // Course load in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carga_horaria: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_conhecimento: Option<String>,
}
