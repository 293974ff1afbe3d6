use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Escola {
    // School ID
    pub id: i64,
    // School name
    pub nome: String,
    // CNPJ registration number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cnpj: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    // Administrative region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regiao_administrativa: Option<String>,
    // Related-record counts, present on list/detail responses
    #[serde(rename = "_count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<EscolaCount>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscolaCount {
    #[serde(default)]
    pub turmas: Option<i64>,
    #[serde(default)]
    pub professores: Option<i64>,
    #[serde(default)]
    pub coordenadores: Option<i64>,
}
