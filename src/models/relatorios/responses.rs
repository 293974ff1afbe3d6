use serde::{Deserialize, Serialize};

use super::situacao::Situacao;

// Student report card, aggregated server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletimAluno {
    pub aluno: BoletimAlunoInfo,
    pub turma: TurmaResumo,
    pub escola: EscolaResumo,
    pub notas: Vec<BoletimNota>,
    // Weighted average across all avaliacoes
    pub media_geral: f64,
    pub total_avaliacoes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletimAlunoInfo {
    pub id: i64,
    pub nome: String,
    pub matricula: String,
    #[serde(default)]
    pub data_nascimento: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmaResumo {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub serie: Option<String>,
    pub ano_letivo: i32,
    #[serde(default)]
    pub turno: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscolaResumo {
    pub id: i64,
    pub nome: String,
}

// One grade line of the boletim
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoletimNota {
    pub disciplina: String,
    pub professor: String,
    pub periodo: String,
    pub avaliacao: String,
    pub nota: f64,
    pub peso: f64,
    pub data_aplicacao: String,
}

// Class-wide report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatorioTurma {
    pub turma: TurmaResumo,
    pub escola: EscolaResumo,
    pub total_alunos: i64,
    pub total_avaliacoes: i64,
    pub media_geral_turma: f64,
    pub disciplinas: Vec<DisciplinaResumo>,
    pub alunos: Vec<AlunoSituacao>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplinaResumo {
    pub nome: String,
    pub professor: String,
    pub media_disciplina: f64,
    pub total_avaliacoes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlunoSituacao {
    pub aluno: AlunoResumo,
    pub media_geral: f64,
    pub total_notas: i64,
    pub situacao: Situacao,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlunoResumo {
    pub id: i64,
    pub nome: String,
    pub matricula: String,
}

// School-wide statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatisticasEscola {
    pub escola: EscolaResumo,
    pub total_turmas: i64,
    pub total_alunos: i64,
    pub total_professores: i64,
    pub total_coordenadores: i64,
    pub total_disciplinas: i64,
    pub total_avaliacoes: i64,
    pub media_geral_escola: f64,
    pub turmas_por_serie: Vec<TurmasPorSerie>,
    pub desempenho_por_turma: Vec<DesempenhoTurma>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurmasPorSerie {
    pub serie: String,
    pub quantidade: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesempenhoTurma {
    pub turma: String,
    #[serde(default)]
    pub serie: Option<String>,
    pub media_geral: f64,
    pub total_alunos: i64,
}
