use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegraAprovacaoInput {
    pub id_escola: i64,
    pub id_coordenador: i64,
    pub ano_letivo: i32,
    pub media_minima: f64,
}
