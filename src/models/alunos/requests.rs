use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlunoInput {
    pub id_turma: i64,
    pub nome: String,
    pub matricula: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_nascimento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone_responsavel: Option<String>,
}
