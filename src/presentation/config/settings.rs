use serde::Deserialize;

use super::Environment;

pub const API_KEY_ENV_VAR: &str = "AI_GATEWAY_API_KEY";

/// Base64 data URIs are about 4/3 the size of the photo they carry.
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound on an analyze request body.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub analysis_model: String,
    pub chat_model: String,
    pub image_prefix_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<env>.toml` and `APP__*`
    /// variables, then applies the gateway credential from
    /// `AI_GATEWAY_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        let configuration = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_body_bytes", DEFAULT_MAX_BODY_BYTES as u64)?
            .set_default("llm.base_url", "https://ai.gateway.example.com/v1")?
            .set_default("llm.analysis_model", "google/gemini-2.5-pro")?
            .set_default("llm.chat_model", "google/gemini-2.5-flash")?
            .set_default("llm.image_prefix_chars", 100)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                config::File::with_name(&format!("appsettings.{}", environment.name()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;

        if let Ok(api_key) = std::env::var(API_KEY_ENV_VAR) {
            settings.llm.api_key = Some(api_key);
        }
        settings.llm.api_key = settings
            .llm
            .api_key
            .take()
            .filter(|key| !key.trim().is_empty());

        Ok(settings)
    }
}
