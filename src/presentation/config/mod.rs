mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{
    AnalysisSettings, ConfigError, DatabaseSettings, ExtractionSettings, LlmSettings,
    LoggingSettings, ServerSettings, Settings, UploadSettings,
};
