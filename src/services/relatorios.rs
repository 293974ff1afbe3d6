//! Client-side report arithmetic.
//!
//! The backend pre-aggregates every report; these helpers re-derive the
//! numbers defensively and compute the handful of figures the screens
//! build locally (situacao counts, approval rate).

use tracing::warn;

use crate::models::relatorios::responses::{BoletimAluno, RelatorioTurma};
use crate::models::relatorios::situacao::Situacao;

/// A grade value with its avaliacao weight.
#[derive(Debug, Clone, Copy)]
pub struct NotaPonderada {
    pub valor: f64,
    pub peso: f64,
}

/// Weighted average: sum(valor*peso) / sum(peso).
///
/// An empty list or a zero total weight yields 0, which downstream reads
/// as "no grades recorded yet".
pub fn media_ponderada(notas: &[NotaPonderada]) -> f64 {
    let peso_total: f64 = notas.iter().map(|n| n.peso).sum();
    if peso_total == 0.0 {
        return 0.0;
    }
    let soma: f64 = notas.iter().map(|n| n.valor * n.peso).sum();
    soma / peso_total
}

/// Re-derive the boletim average from its grade lines.
pub fn media_boletim(boletim: &BoletimAluno) -> f64 {
    let notas: Vec<NotaPonderada> = boletim
        .notas
        .iter()
        .map(|n| NotaPonderada {
            valor: n.nota,
            peso: n.peso,
        })
        .collect();
    media_ponderada(&notas)
}

/// The boletim average, cross-checked against the server-reported value.
/// A mismatch is logged and the backend number wins.
pub fn media_conferida(boletim: &BoletimAluno) -> f64 {
    let recalculada = media_boletim(boletim);
    if (recalculada - boletim.media_geral).abs() > 0.05 {
        warn!(
            reportada = boletim.media_geral,
            recalculada, "media do boletim diverge do backend"
        );
    }
    boletim.media_geral
}

/// Classify the boletim against a minimum passing average.
pub fn situacao_boletim(boletim: &BoletimAluno, media_minima: f64) -> Situacao {
    Situacao::classificar(boletim.media_geral, media_minima)
}

pub fn contar_situacao(relatorio: &RelatorioTurma, situacao: Situacao) -> usize {
    relatorio
        .alunos
        .iter()
        .filter(|a| a.situacao == situacao)
        .count()
}

/// Approval rate of a turma, in percent; 0 for an empty roster.
pub fn taxa_aprovacao(relatorio: &RelatorioTurma) -> f64 {
    let total = relatorio.alunos.len();
    if total == 0 {
        return 0.0;
    }
    let aprovados = contar_situacao(relatorio, Situacao::Aprovado);
    (aprovados as f64 / total as f64) * 100.0
}
