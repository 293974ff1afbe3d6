pub mod alunos;
pub mod auth;
pub mod avaliacoes;
pub mod common;
pub mod coordenadores;
pub mod disciplinas;
pub mod escolas;
pub mod notas;
pub mod periodos;
pub mod professores;
pub mod regras;
pub mod relatorios;
pub mod turmas;
pub mod users;
pub mod vinculos;

pub use common::{ApiResponse, ListParams, PaginatedList, PaginationMeta, SortOrder};
