mod common;

use httpmock::prelude::*;
use serde_json::json;

use sigea_client::models::common::{ListParams, SortOrder};
use sigea_client::models::escolas::requests::EscolaInput;
use sigea_client::models::turmas::requests::TurmaInput;
use sigea_client::models::users::entities::Role;

#[tokio::test]
async fn find_all_sends_pagination_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/escolas")
                .query_param("page", "2")
                .query_param("limit", "10")
                .query_param("search", "Paranoá")
                .query_param("order", "asc");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    {"id": 11, "nome": "EC 01 do Paranoá", "regiaoAdministrativa": "Paranoá",
                     "_count": {"turmas": 4, "professores": 9, "coordenadores": 1}}
                ],
                "pagination": {"total": 21, "page": 2, "limit": 10, "totalPages": 3}
            }));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Admin, "tok").await;
    let page = api
        .escolas
        .find_all(
            &ListParams::new()
                .page(2)
                .limit(10)
                .search("Paranoá")
                .order(SortOrder::Asc),
        )
        .await
        .expect("find_all");

    mock.assert_async().await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].nome, "EC 01 do Paranoá");
    assert_eq!(page.items[0].count.as_ref().unwrap().turmas, Some(4));
    assert_eq!(page.total(), 21);
    assert_eq!(page.pagination.unwrap().total_pages, 3);
}

#[tokio::test]
async fn create_posts_camel_case_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/turmas").json_body(json!({
                "idEscola": 11,
                "nome": "7A",
                "anoLetivo": 2025,
                "serie": "7º Ano"
            }));
            then.status(201).json_body(json!({
                "success": true,
                "message": "Turma criada",
                "data": {"id": 5, "idEscola": 11, "nome": "7A", "anoLetivo": 2025, "serie": "7º Ano"}
            }));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Coordenador, "tok").await;
    let turma = api
        .turmas
        .create(&TurmaInput {
            id_escola: 11,
            nome: "7A".to_string(),
            ano_letivo: 2025,
            serie: Some("7º Ano".to_string()),
            turno: None,
        })
        .await
        .expect("create");

    mock.assert_async().await;
    assert_eq!(turma.id, 5);
    assert_eq!(turma.ano_letivo, 2025);
}

#[tokio::test]
async fn update_and_delete_hit_the_id_route() {
    let server = MockServer::start_async().await;
    let update_mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/escolas/11");
            then.status(200).json_body(json!({
                "success": true,
                "data": {"id": 11, "nome": "EC 01 renomeada"}
            }));
        })
        .await;
    let delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/escolas/11");
            then.status(200)
                .json_body(json!({"success": true, "message": "Escola removida", "data": null}));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Admin, "tok").await;
    let input = EscolaInput {
        nome: "EC 01 renomeada".to_string(),
        cnpj: None,
        telefone: None,
        email: None,
        regiao_administrativa: None,
    };
    let escola = api.escolas.update(11, &input).await.expect("update");
    assert_eq!(escola.nome, "EC 01 renomeada");
    api.escolas.delete(11).await.expect("delete");

    update_mock.assert_async().await;
    delete_mock.assert_async().await;
}

#[tokio::test]
async fn backend_message_surfaces_on_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/turmas");
            then.status(500)
                .json_body(json!({"success": false, "message": "Escola não existe"}));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Admin, "tok").await;
    let err = api
        .turmas
        .create(&TurmaInput {
            id_escola: 999,
            nome: "7A".to_string(),
            ano_letivo: 2025,
            serie: None,
            turno: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), "E002");
    assert_eq!(err.message(), "Escola não existe");
}

#[tokio::test]
async fn not_found_maps_to_its_own_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/alunos/404");
            then.status(404)
                .json_body(json!({"success": false, "message": "Aluno não encontrado"}));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Admin, "tok").await;
    let err = api.alunos.find_by_id(404).await.unwrap_err();
    assert_eq!(err.code(), "E006");
}

#[tokio::test]
async fn success_false_with_200_is_a_backend_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/disciplinas");
            then.status(200)
                .json_body(json!({"success": false, "message": "Falha ao listar"}));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Admin, "tok").await;
    let err = api
        .disciplinas
        .find_all(&ListParams::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");
    assert_eq!(err.message(), "Falha ao listar");
}

#[tokio::test]
async fn entity_sub_routes_deserialize_plain_lists() {
    let server = MockServer::start_async().await;
    let roster_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/turmas/5/alunos");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    {"id": 1, "idTurma": 5, "nome": "João Lima", "matricula": "2025001"},
                    {"id": 2, "idTurma": 5, "nome": "Ana Reis", "matricula": "2025002"}
                ]
            }));
        })
        .await;
    let matricula_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/alunos/matricula/2025002");
            then.status(200).json_body(json!({
                "success": true,
                "data": {"id": 2, "idTurma": 5, "nome": "Ana Reis", "matricula": "2025002"}
            }));
        })
        .await;

    let (api, _session) = common::logged_in_client(&server, Role::Professor, "tok").await;
    let alunos = api.turmas.alunos(5).await.expect("roster");
    assert_eq!(alunos.len(), 2);

    let ana = api
        .alunos
        .find_by_matricula("2025002")
        .await
        .expect("matricula lookup");
    assert_eq!(ana.nome, "Ana Reis");

    roster_mock.assert_async().await;
    matricula_mock.assert_async().await;
}
