use serde::{Deserialize, Serialize};

use crate::models::escolas::entities::Escola;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: i64,
    pub id_escola: i64,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola: Option<Escola>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<ProfessorCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorCount {
    // Number of turma-disciplina assignments
    #[serde(default)]
    pub turmas_professores: Option<i64>,
}
