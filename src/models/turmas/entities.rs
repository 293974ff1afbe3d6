use serde::{Deserialize, Serialize};

use crate::models::escolas::entities::Escola;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turma {
    pub id: i64,
    pub id_escola: i64,
    pub nome: String,
    // Academic year
    pub ano_letivo: i32,
    // Grade level, e.g. "7º Ano"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serie: Option<String>,
    // Shift: Matutino / Vespertino / Noturno
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turno: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola: Option<Escola>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<TurmaCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaCount {
    #[serde(default)]
    pub alunos: Option<i64>,
    #[serde(default)]
    pub turmas_professores: Option<i64>,
}
