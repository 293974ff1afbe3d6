use crate::models::escolas::entities::Escola;
use crate::models::notas::entities::Nota;
use crate::models::turmas::entities::Turma;
use crate::models::users::entities::Role;

/// One stats tile of the Admin/Coordenador grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub titulo: &'static str,
    pub valor: i64,
    pub rota: &'static str,
}

/// Role dashboard, one mutually exclusive variant per layout.
///
/// Admin and Coordenador share the stats grid; Professor and Aluno have
/// their own layouts. Selection is a tagged dispatch on [`Role`], not a
/// chain of string comparisons.
#[derive(Debug, Clone)]
pub enum DashboardView {
    AdminCoordenador {
        cards: Vec<StatCard>,
    },
    Professor {
        minhas_turmas: Vec<Turma>,
        total_avaliacoes: i64,
    },
    Aluno {
        minha_turma: Option<Turma>,
        minha_escola: Option<Escola>,
        notas_recentes: Vec<Nota>,
    },
}

impl DashboardView {
    /// Layout variant a role maps to; Admin and Coordenador share one.
    pub fn variant_name(role: Role) -> &'static str {
        match role {
            Role::Admin | Role::Coordenador => "admin-coordenador",
            Role::Professor => "professor",
            Role::Aluno => "aluno",
        }
    }
}

/// Welcome line under the dashboard header.
pub fn welcome_message(role: Role) -> &'static str {
    match role {
        Role::Admin => "Gerencie todas as escolas e recursos do sistema.",
        Role::Coordenador => "Acompanhe o desempenho da sua escola.",
        Role::Professor => "Gerencie suas turmas, avaliações e notas.",
        Role::Aluno => "Acompanhe seu desempenho escolar.",
    }
}

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrador",
        Role::Coordenador => "Coordenador",
        Role::Professor => "Professor",
        Role::Aluno => "Aluno",
    }
}
