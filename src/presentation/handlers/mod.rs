mod analyze;
mod chat;
mod error;
mod health;
pub mod types;

pub use analyze::analyze_ecg_handler;
pub use chat::ecg_chat_handler;
pub use error::ApiErrorResponse;
pub use health::health_handler;
