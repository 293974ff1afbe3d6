use std::sync::Arc;

use super::transport::Transport;
use crate::errors::Result;
use crate::models::relatorios::responses::{BoletimAluno, EstatisticasEscola, RelatorioTurma};

/// Report routes; aggregation happens server-side and the client renders
/// (and defensively re-derives) the numbers.
pub struct RelatoriosApi {
    transport: Arc<Transport>,
}

impl RelatoriosApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Boletim of the logged-in aluno.
    pub async fn meu_boletim(&self) -> Result<BoletimAluno> {
        self.transport.get_data("relatorios/meu-boletim", &[]).await
    }

    pub async fn boletim_aluno(&self, id_aluno: i64) -> Result<BoletimAluno> {
        self.transport
            .get_data(&format!("relatorios/alunos/{id_aluno}"), &[])
            .await
    }

    pub async fn relatorio_turma(&self, id_turma: i64) -> Result<RelatorioTurma> {
        self.transport
            .get_data(&format!("relatorios/turmas/{id_turma}"), &[])
            .await
    }

    /// Statistics of the logged-in user's school.
    pub async fn minha_escola(&self) -> Result<EstatisticasEscola> {
        self.transport.get_data("relatorios/minha-escola", &[]).await
    }

    pub async fn estatisticas_escola(&self, id_escola: i64) -> Result<EstatisticasEscola> {
        self.transport
            .get_data(&format!("relatorios/escolas/{id_escola}"), &[])
            .await
    }
}
