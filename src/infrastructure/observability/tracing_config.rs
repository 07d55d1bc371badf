/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    /// Filter used when `RUST_LOG` is unset.
    pub default_level: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            default_level: "info".to_string(),
            json_format: false,
        }
    }
}

impl TracingConfig {
    pub fn env_filter_directive(&self) -> String {
        format!(
            "{level},contract_analyzer={level},tower_http=info",
            level = self.default_level
        )
    }
}
