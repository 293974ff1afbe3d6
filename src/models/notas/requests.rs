use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaInput {
    pub id_avaliacao: i64,
    pub id_aluno: i64,
    pub nota_obtida: f64,
}

// Batch entry: every grade of one avaliacao in a single call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotasBatchInput {
    pub id_avaliacao: i64,
    pub notas: Vec<NotaBatchItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotaBatchItem {
    pub id_aluno: i64,
    pub nota_obtida: f64,
}
