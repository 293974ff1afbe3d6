//! Unified error handling.
//!
//! Error types are generated by a macro so each variant carries a stable
//! code and a type name, plus snake_case convenience constructors.

use std::fmt;

/// Macro defining the crate error enum.
///
/// Generates:
/// - the enum definition
/// - code() - stable error code
/// - error_type() - human-readable type name
/// - message() - error detail
/// - snake_case convenience constructors
macro_rules! define_sigea_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SigeaError {
            $($variant(String),)*
        }

        impl SigeaError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(SigeaError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SigeaError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(SigeaError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl SigeaError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SigeaError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_sigea_errors! {
    Transport("E001", "Transport Error"),
    Backend("E002", "Backend Error"),
    ApiContract("E003", "API Contract Error"),
    Authentication("E004", "Authentication Error"),
    Authorization("E005", "Authorization Error"),
    NotFound("E006", "Resource Not Found"),
    Validation("E007", "Validation Error"),
    FileRejected("E008", "File Rejected"),
    Serialization("E009", "Serialization Error"),
    SessionStore("E010", "Session Store Error"),
    DateParse("E011", "Date Parse Error"),
    FileOperation("E012", "File Operation Error"),
}

impl SigeaError {
    /// Whether the error came from a 401. The session has already been
    /// cleared by the transport when this is returned.
    pub fn is_authentication(&self) -> bool {
        matches!(self, SigeaError::Authentication(_))
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SigeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SigeaError {}

impl From<reqwest::Error> for SigeaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SigeaError::Serialization(err.to_string())
        } else {
            SigeaError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SigeaError {
    fn from(err: serde_json::Error) -> Self {
        SigeaError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SigeaError {
    fn from(err: std::io::Error) -> Self {
        SigeaError::FileOperation(err.to_string())
    }
}

impl From<chrono::ParseError> for SigeaError {
    fn from(err: chrono::ParseError) -> Self {
        SigeaError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SigeaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SigeaError::transport("test").code(), "E001");
        assert_eq!(SigeaError::backend("test").code(), "E002");
        assert_eq!(SigeaError::validation("test").code(), "E007");
        assert_eq!(SigeaError::file_rejected("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SigeaError::authentication("test").error_type(),
            "Authentication Error"
        );
        assert_eq!(
            SigeaError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SigeaError::validation("Nota fora do intervalo");
        assert_eq!(err.message(), "Nota fora do intervalo");
    }

    #[test]
    fn test_format_simple() {
        let err = SigeaError::backend("Escola nao encontrada");
        let formatted = err.format_simple();
        assert!(formatted.contains("Backend Error"));
        assert!(formatted.contains("Escola nao encontrada"));
    }

    #[test]
    fn test_is_authentication() {
        assert!(SigeaError::authentication("401").is_authentication());
        assert!(!SigeaError::backend("500").is_authentication());
    }
}
