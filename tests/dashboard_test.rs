mod common;

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use sigea_client::models::auth::responses::AuthResponse;
use sigea_client::models::users::entities::{Role, User};
use sigea_client::services::load_dashboard;
use sigea_client::views::dashboard::DashboardView;

fn list_page(total: i64) -> serde_json::Value {
    json!({
        "success": true,
        "data": [],
        "pagination": {"total": total, "page": 1, "limit": 1, "totalPages": total}
    })
}

#[tokio::test]
async fn admin_dashboard_is_a_stats_grid() {
    let server = MockServer::start_async().await;
    for (path, total) in [
        ("/escolas", 3),
        ("/turmas", 12),
        ("/alunos", 240),
        ("/professores", 18),
    ] {
        server
            .mock_async(move |when, then| {
                when.method(GET).path(path).query_param("limit", "1");
                then.status(200).json_body(list_page(total));
            })
            .await;
    }

    let (api, session) = common::logged_in_client(&server, Role::Admin, "tok").await;
    let dashboard = load_dashboard(&api, &session).await.expect("dashboard");

    match dashboard {
        DashboardView::AdminCoordenador { cards } => {
            let valores: Vec<_> = cards.iter().map(|c| (c.titulo, c.valor)).collect();
            assert_eq!(
                valores,
                vec![
                    ("Escolas", 3),
                    ("Turmas", 12),
                    ("Alunos", 240),
                    ("Professores", 18)
                ]
            );
        }
        other => panic!("expected stats grid, got {other:?}"),
    }
}

#[tokio::test]
async fn professor_dashboard_lists_own_turmas() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/turmas").query_param("limit", "100");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    {"id": 5, "idEscola": 11, "nome": "7A", "anoLetivo": 2025,
                     "serie": "7º Ano", "turno": "Matutino"}
                ],
                "pagination": {"total": 1, "page": 1, "limit": 100, "totalPages": 1}
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/vinculos/professor/4");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    {"id": 1, "idTurma": 5, "idProfessor": 4, "idDisciplina": 2,
                     "_count": {"avaliacoes": 3}},
                    {"id": 2, "idTurma": 6, "idProfessor": 4, "idDisciplina": 2,
                     "_count": {"avaliacoes": 2}}
                ]
            }));
        })
        .await;

    let (api, session) = common::client(&server);
    let mut user = common::user(Role::Professor);
    user.id_professor = Some(4);
    session
        .start(AuthResponse {
            token: "tok".to_string(),
            user,
        })
        .await
        .unwrap();

    let dashboard = load_dashboard(&api, &session).await.expect("dashboard");
    match dashboard {
        DashboardView::Professor {
            minhas_turmas,
            total_avaliacoes,
        } => {
            assert_eq!(minhas_turmas.len(), 1);
            assert_eq!(minhas_turmas[0].nome, "7A");
            assert_eq!(total_avaliacoes, 5);
        }
        other => panic!("expected professor variant, got {other:?}"),
    }
}

#[tokio::test]
async fn aluno_dashboard_uses_cached_profile() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/notas/aluno/3").query_param("limit", "5");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    {"id": 1, "idAvaliacao": 9, "idAluno": 3, "notaObtida": 8.5,
                     "avaliacao": {"id": 9, "idTurmaProfessor": 3, "idPeriodoLetivo": 1,
                                   "titulo": "Prova 1", "dataAplicacao": "2025-04-10", "peso": 1.0}}
                ]
            }));
        })
        .await;

    let (api, session) = common::client(&server);
    let user = User {
        id: 7,
        nome: "João Lima".to_string(),
        email: "joao@escola.gov.br".to_string(),
        role: Role::Aluno,
        id_professor: None,
        id_coordenador: None,
        id_aluno: Some(3),
        professor: None,
        coordenador: None,
        aluno: Some(serde_json::from_value(json!({
            "id": 3,
            "idTurma": 5,
            "nome": "João Lima",
            "matricula": "2025001",
            "turma": {"id": 5, "idEscola": 11, "nome": "7A", "anoLetivo": 2025,
                      "escola": {"id": 11, "nome": "EC 01 do Paranoá"}}
        })).unwrap()),
    };
    session
        .start(AuthResponse {
            token: "tok".to_string(),
            user,
        })
        .await
        .unwrap();

    let dashboard = load_dashboard(&api, &session).await.expect("dashboard");
    match dashboard {
        DashboardView::Aluno {
            minha_turma,
            minha_escola,
            notas_recentes,
        } => {
            assert_eq!(minha_turma.unwrap().nome, "7A");
            assert_eq!(minha_escola.unwrap().nome, "EC 01 do Paranoá");
            assert_eq!(notas_recentes.len(), 1);
            assert_eq!(notas_recentes[0].nota_obtida, 8.5);
        }
        other => panic!("expected aluno variant, got {other:?}"),
    }
}

#[tokio::test]
async fn dashboard_requires_a_session() {
    let server = MockServer::start_async().await;
    let (api, session) = common::client(&server);
    let err = load_dashboard(&api, &session).await.unwrap_err();
    assert!(err.is_authentication());
}
