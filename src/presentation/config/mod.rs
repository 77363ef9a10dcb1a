mod environment;
mod settings;

pub use environment::{ENVIRONMENT_ENV_VAR, Environment, UnknownEnvironment};
pub use settings::{API_KEY_ENV_VAR, DEFAULT_MAX_BODY_BYTES, LlmSettings, LoggingSettings, ServerSettings, Settings};
