use crate::presentation::config::{Environment, LoggingSettings};

/// Crate targets logged below the configured level.
const VERBOSE_TARGETS: [&str; 2] = ["ecg_insight=debug", "tower_http=debug"];

pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: settings.enable_json,
            level: settings.level.clone(),
        }
    }

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub fn filter_directives(&self) -> String {
        std::iter::once(self.level.as_str())
            .chain(VERBOSE_TARGETS)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::from_env().unwrap_or_default().to_string(),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            level: "info".to_string(),
        }
    }
}
