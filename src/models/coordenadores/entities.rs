use serde::{Deserialize, Serialize};

use crate::models::escolas::entities::Escola;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordenador {
    pub id: i64,
    pub id_escola: i64,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    // Expanded relation, present when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola: Option<Escola>,
}
