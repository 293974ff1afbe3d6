use serde::{Deserialize, Serialize};

use crate::models::coordenadores::entities::Coordenador;
use crate::models::escolas::entities::Escola;

/// Minimum passing average applied when no rule covers a school/year.
pub const MEDIA_MINIMA_PADRAO: f64 = 6.0;

// Approval rule set by a coordinator for a school and academic year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegraAprovacao {
    pub id: i64,
    pub id_escola: i64,
    pub id_coordenador: i64,
    pub ano_letivo: i32,
    // Minimum passing average, in [0, 10]
    pub media_minima: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escola: Option<Escola>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordenador: Option<Coordenador>,
}

impl RegraAprovacao {
    /// Minimum average for a school/year, falling back to the default when
    /// no rule matches.
    pub fn media_minima_para(regras: &[RegraAprovacao], id_escola: i64, ano_letivo: i32) -> f64 {
        regras
            .iter()
            .find(|r| r.id_escola == id_escola && r.ano_letivo == ano_letivo)
            .map(|r| r.media_minima)
            .unwrap_or(MEDIA_MINIMA_PADRAO)
    }
}
