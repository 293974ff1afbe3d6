pub mod responses;
pub mod situacao;

pub use situacao::{FaixaMedia, Situacao};
