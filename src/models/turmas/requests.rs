use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaInput {
    pub id_escola: i64,
    pub nome: String,
    pub ano_letivo: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turno: Option<String>,
}
