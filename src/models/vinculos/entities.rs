use serde::{Deserialize, Serialize};

use crate::models::disciplinas::entities::Disciplina;
use crate::models::professores::entities::Professor;
use crate::models::turmas::entities::Turma;

// Ternary turma-professor-disciplina association; avaliacoes hang off it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaProfessor {
    pub id: i64,
    pub id_turma: i64,
    pub id_professor: i64,
    pub id_disciplina: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turma: Option<Turma>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<Professor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disciplina: Option<Disciplina>,
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<TurmaProfessorCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaProfessorCount {
    #[serde(default)]
    pub avaliacoes: Option<i64>,
}
