use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sessao: SessaoConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    // 0 disables the client timeout, matching the original front-end
    pub timeout_secs: u64,
}

/// Session store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessaoConfig {
    // Empty means the platform data directory
    pub dir: String,
}

/// Client-side upload constraints for avaliacao attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_size: usize,
    pub allowed_types: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "SIGEA".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 0,
        }
    }
}

impl Default for SessaoConfig {
    fn default() -> Self {
        Self { dir: String::new() }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024,
            allowed_types: vec!["application/pdf".to_string()],
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            api: ApiConfig::default(),
            sessao: SessaoConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}
