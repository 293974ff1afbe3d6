use serde::{Deserialize, Serialize};

use crate::models::alunos::entities::Aluno;
use crate::models::avaliacoes::entities::Avaliacao;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nota {
    pub id: i64,
    pub id_avaliacao: i64,
    pub id_aluno: i64,
    // Score in [0, 10]
    pub nota_obtida: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_lancamento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avaliacao: Option<Avaliacao>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aluno: Option<Aluno>,
}
