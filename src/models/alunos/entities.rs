use serde::{Deserialize, Serialize};

use crate::models::turmas::entities::Turma;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aluno {
    pub id: i64,
    pub id_turma: i64,
    pub nome: String,
    // Enrollment number, unique per school
    pub matricula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_nascimento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    // Guardian phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone_responsavel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turma: Option<Turma>,
}
