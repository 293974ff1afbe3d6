use std::sync::Arc;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

use sigea_client::api::ApiClient;
use sigea_client::config::AppConfig;
use sigea_client::errors::Result;
use sigea_client::models::auth::requests::LoginRequest;
use sigea_client::models::regras::entities::RegraAprovacao;
use sigea_client::models::relatorios::situacao::FaixaMedia;
use sigea_client::models::users::entities::Role;
use sigea_client::services::{self, relatorios};
use sigea_client::session::Session;
use sigea_client::session::store::FileSessionStore;
use sigea_client::views;
use sigea_client::views::dashboard::DashboardView;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let start = chrono::Utc::now();

    // Pre-startup processing //

    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // Logging
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting {} v{} against {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    // Session: hydrate from the persisted store, then fall back to env
    // credentials when there is no usable token
    let session = Arc::new(Session::new(Arc::new(FileSessionStore::from_config(
        &config.sessao.dir,
    ))));
    session.hydrate().await?;

    let api = ApiClient::new(&config.api, session.clone())?;

    if !session.is_authenticated() {
        match (std::env::var("SIGEA_EMAIL"), std::env::var("SIGEA_SENHA")) {
            (Ok(email), Ok(senha)) => {
                let auth = api.auth.login(&LoginRequest { email, senha }).await?;
                warn!("Logged in as {} ({})", auth.user.nome, auth.user.role);
            }
            _ => {
                warn!(
                    "No stored session and no SIGEA_EMAIL/SIGEA_SENHA set; nothing to show"
                );
                return Ok(());
            }
        }
    } else {
        // Refresh the cached profile; a 401 here clears the stale session
        match api.auth.profile().await {
            Ok(user) => debug!("Session restored for {}", user.nome),
            Err(e) if e.is_authentication() => {
                warn!("Stored session expired, run again with credentials");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start)
            .num_milliseconds()
    );

    let user = session.user().expect("session has a user after login");
    println!("Bem-vindo, {}!", user.nome);
    println!("{}", views::welcome_message(user.role));
    println!();

    render_nav(user.role);

    let dashboard = services::load_dashboard(&api, &session).await?;
    render_dashboard(&dashboard);

    // The aluno variant also gets the full boletim, classified against the
    // school rule for its year
    if session.is_aluno() {
        render_boletim(&api).await?;
    }

    Ok(())
}

fn render_nav(role: Role) {
    println!("== Menu ({}) ==", views::role_label(role));
    for item in views::visible_nav_items(role, views::nav_catalog()) {
        println!("  {:<20} {}", item.label, item.route);
    }
    let actions = views::visible_quick_actions(role, views::quick_action_catalog());
    if !actions.is_empty() {
        println!("-- Ações rápidas --");
        for action in actions {
            println!("  {:<20} {}", action.label, action.route);
        }
    }
    println!();
}

fn render_dashboard(dashboard: &DashboardView) {
    match dashboard {
        DashboardView::AdminCoordenador { cards } => {
            println!("== Visão geral ==");
            for card in cards {
                println!("  {:<12} {:>6}", card.titulo, card.valor);
            }
        }
        DashboardView::Professor {
            minhas_turmas,
            total_avaliacoes,
        } => {
            println!("== Minhas turmas ({total_avaliacoes} avaliações) ==");
            if minhas_turmas.is_empty() {
                println!("  Nenhuma turma vinculada.");
            }
            for turma in minhas_turmas {
                println!(
                    "  {:<12} {} - {}",
                    turma.nome,
                    turma.serie.as_deref().unwrap_or("-"),
                    turma.turno.as_deref().unwrap_or("-")
                );
            }
        }
        DashboardView::Aluno {
            minha_turma,
            minha_escola,
            notas_recentes,
        } => {
            println!("== Meu boletim ==");
            println!(
                "  Turma:  {}",
                minha_turma.as_ref().map(|t| t.nome.as_str()).unwrap_or("Não definida")
            );
            println!(
                "  Escola: {}",
                minha_escola.as_ref().map(|e| e.nome.as_str()).unwrap_or("Não definida")
            );
            for nota in notas_recentes {
                let titulo = nota
                    .avaliacao
                    .as_ref()
                    .map(|a| a.titulo.as_str())
                    .unwrap_or("Avaliação");
                println!("  {titulo}: {:.1}", nota.nota_obtida);
            }
        }
    }
    println!();
}

async fn render_boletim(api: &ApiClient) -> Result<()> {
    let boletim = api.relatorios.meu_boletim().await?;
    let regras = api
        .regras
        .find_by_escola(boletim.escola.id)
        .await
        .unwrap_or_else(|e| {
            debug!("Regras unavailable, using default minimum: {e}");
            Vec::new()
        });
    let media_minima = RegraAprovacao::media_minima_para(
        &regras,
        boletim.escola.id,
        boletim.turma.ano_letivo,
    );

    println!("== Boletim de {} ({}) ==", boletim.aluno.nome, boletim.turma.nome);
    for nota in &boletim.notas {
        println!(
            "  {:<16} {:<20} {:>5.1} (peso {})",
            nota.disciplina, nota.avaliacao, nota.nota, nota.peso
        );
    }
    let media = relatorios::media_conferida(&boletim);
    let situacao = relatorios::situacao_boletim(&boletim, media_minima);
    println!(
        "  Média geral: {media:.1} [{}]  Situação: {}",
        FaixaMedia::classificar(media).as_str(),
        situacao.label_curto()
    );
    Ok(())
}
