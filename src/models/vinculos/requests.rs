use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaProfessorInput {
    pub id_turma: i64,
    pub id_professor: i64,
    pub id_disciplina: i64,
}
