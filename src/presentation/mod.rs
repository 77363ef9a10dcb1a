pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, DEFAULT_MAX_BODY_BYTES, LlmSettings, LoggingSettings, ServerSettings, Settings};
pub use router::{ANALYZE_ECG_PATH, ECG_CHAT_PATH, create_router};
pub use state::AppState;
