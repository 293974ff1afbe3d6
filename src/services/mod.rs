pub mod arquivo;
pub mod dashboard;
pub mod relatorios;

pub use arquivo::ArquivoProva;
pub use dashboard::load_dashboard;
