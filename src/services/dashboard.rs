//! Loads the data behind each role dashboard variant.

use tracing::debug;

use crate::api::ApiClient;
use crate::errors::Result;
use crate::models::common::ListParams;
use crate::models::users::entities::{Role, User};
use crate::session::{Session, guard};
use crate::views::dashboard::{DashboardView, StatCard};

/// Compose the dashboard for the logged-in user.
pub async fn load_dashboard(api: &ApiClient, session: &Session) -> Result<DashboardView> {
    let user = guard::require_authenticated(session)?;
    match user.role {
        Role::Admin | Role::Coordenador => load_admin_stats(api).await,
        Role::Professor => load_professor(api, &user).await,
        Role::Aluno => Ok(load_aluno(api, &user).await),
    }
}

/// Stats grid: the totals come from the pagination block of a limit=1
/// page per entity.
async fn load_admin_stats(api: &ApiClient) -> Result<DashboardView> {
    let params = ListParams::new().limit(1);
    let (escolas, turmas, alunos, professores) = tokio::join!(
        api.escolas.find_all(&params),
        api.turmas.find_all(&params),
        api.alunos.find_all(&params),
        api.professores.find_all(&params),
    );

    let cards = vec![
        StatCard { titulo: "Escolas", valor: escolas?.total(), rota: "/escolas" },
        StatCard { titulo: "Turmas", valor: turmas?.total(), rota: "/turmas" },
        StatCard { titulo: "Alunos", valor: alunos?.total(), rota: "/alunos" },
        StatCard { titulo: "Professores", valor: professores?.total(), rota: "/professores" },
    ];
    Ok(DashboardView::AdminCoordenador { cards })
}

/// The backend scopes /turmas to the professor's own turmas; the avaliacao
/// total comes from the vinculo counts.
async fn load_professor(api: &ApiClient, user: &User) -> Result<DashboardView> {
    let minhas_turmas = api
        .turmas
        .find_all(&ListParams::new().limit(100))
        .await?
        .items;

    let total_avaliacoes = match user.id_professor {
        Some(id_professor) => api
            .vinculos
            .find_by_professor(id_professor, &ListParams::new().limit(100))
            .await?
            .items
            .iter()
            .filter_map(|v| v.count.as_ref().and_then(|c| c.avaliacoes))
            .sum(),
        None => 0,
    };

    Ok(DashboardView::Professor {
        minhas_turmas,
        total_avaliacoes,
    })
}

/// Aluno data comes from the cached profile; the recent grades are
/// best-effort and an error just leaves the list empty.
async fn load_aluno(api: &ApiClient, user: &User) -> DashboardView {
    let minha_turma = user.aluno.as_ref().and_then(|a| a.turma.clone());
    let minha_escola = minha_turma.as_ref().and_then(|t| t.escola.clone());

    let notas_recentes = match user.id_aluno {
        Some(id_aluno) => api
            .notas
            .find_by_aluno(id_aluno, &ListParams::new().limit(5))
            .await
            .map(|page| page.items)
            .unwrap_or_else(|e| {
                debug!("notas recentes unavailable: {e}");
                Vec::new()
            }),
        None => Vec::new(),
    };

    DashboardView::Aluno {
        minha_turma,
        minha_escola,
        notas_recentes,
    }
}
