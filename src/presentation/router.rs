use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderName;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{analyze_ecg_handler, ecg_chat_handler, health_handler};
use crate::presentation::state::AppState;

pub const ANALYZE_ECG_PATH: &str = "/api/v1/analyze-ecg";
pub const ECG_CHAT_PATH: &str = "/api/v1/ecg-chat";

/// Request headers browsers may send cross-origin.
pub const CORS_ALLOWED_HEADERS: [&str; 4] =
    ["authorization", "x-client-info", "apikey", "content-type"];

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(CORS_ALLOWED_HEADERS.map(HeaderName::from_static));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let image_body_limit = DefaultBodyLimit::max(state.settings.server.max_body_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            ANALYZE_ECG_PATH,
            post(analyze_ecg_handler::<L>).layer(image_body_limit),
        )
        .route(ECG_CHAT_PATH, post(ecg_chat_handler::<L>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
