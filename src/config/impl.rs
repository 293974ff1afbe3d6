use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Load configuration from files and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Default configuration file first
            .add_source(File::with_name("config").required(false))
            // Then the environment-specific one
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Environment variables override everything
            .add_source(
                Environment::with_prefix("SIGEA")
                    .separator("_")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("api.base_url", std::env::var("SIGEA_API_URL").ok())?
            .set_override_option("sessao.dir", std::env::var("SIGEA_SESSAO_DIR").ok())?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Global configuration instance.
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// Initialize the configuration (called at application startup).
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}
