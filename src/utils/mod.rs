pub mod arquivo;
pub mod validate;

pub use arquivo::{format_file_size, validate_pdf_magic};
pub use validate::{validate_email, validate_media_minima, validate_nota, validate_peso, validate_required};
