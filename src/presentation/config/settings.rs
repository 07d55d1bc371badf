use std::path::Path;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use serde::Deserialize;

use super::environment::{Environment, UnknownEnvironment};

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip)]
    pub environment: Environment,
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub analysis: AnalysisSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_upload_size_mb: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_upload_size_mb: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub max_contract_chars: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_contract_chars: 12_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// `openai`, `azure`, `lmstudio` or `mock`.
    pub provider: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub chat_model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_key: String::new(),
            base_url: None,
            azure_endpoint: None,
            azure_api_version: "2024-02-01".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            max_tokens: 800,
            temperature: 0.0,
            timeout_seconds: 60,
            max_attempts: 3,
            initial_backoff_ms: 2_000,
            max_backoff_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub pdf: bool,
    pub docx: bool,
    pub text: bool,
    pub timeout_seconds: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            pdf: true,
            docx: true,
            text: true,
            timeout_seconds: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Persistence is disabled when unset.
    pub url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid APP_ENVIRONMENT: {0}")]
    InvalidEnvironment(#[from] UnknownEnvironment),
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl Settings {
    /// Reads `.env`, then layers `config/base.toml`, `config/{environment}.toml`
    /// and `APP_*` environment variables over the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(raw) => raw.parse::<Environment>()?,
            Err(_) => Environment::default(),
        };

        Self::load_from(environment, Path::new("config"))
    }

    pub fn load_from(environment: Environment, config_dir: &Path) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(File::from(config_dir.join("base.toml")).required(false))
            .add_source(
                File::from(config_dir.join(environment.config_file_name())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.environment = environment;
        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.upload.max_upload_size_mb == 0 {
            problems.push("upload.max_upload_size_mb must be greater than 0".to_string());
        }
        if self.analysis.max_contract_chars == 0 {
            problems.push("analysis.max_contract_chars must be greater than 0".to_string());
        }
        if self.llm.max_tokens == 0 {
            problems.push("llm.max_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            problems.push("llm.temperature must be between 0 and 2".to_string());
        }
        if self.llm.timeout_seconds == 0 {
            problems.push("llm.timeout_seconds must be greater than 0".to_string());
        }
        if self.llm.max_attempts == 0 {
            problems.push("llm.max_attempts must be at least 1".to_string());
        }
        if self.llm.initial_backoff_ms > self.llm.max_backoff_ms {
            problems.push("llm.initial_backoff_ms must not exceed llm.max_backoff_ms".to_string());
        }
        if self.llm.provider != "mock" && self.llm.api_key.trim().is_empty() {
            problems.push(format!(
                "llm.api_key is required for provider {}",
                self.llm.provider
            ));
        }
        if self.extraction.timeout_seconds == 0 {
            problems.push("extraction.timeout_seconds must be greater than 0".to_string());
        }
        if self.database.url.is_some() && self.database.max_connections == 0 {
            problems.push("database.max_connections must be greater than 0".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.upload.max_upload_size_mb.saturating_mul(BYTES_PER_MB)
    }
}
