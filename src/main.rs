use std::sync::Arc;

use tokio::net::TcpListener;

use ecg_insight::infrastructure::llm::GatewayLlmClient;
use ecg_insight::infrastructure::observability::{TracingConfig, init_tracing};
use ecg_insight::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before the environment is resolved, so `.env` can set APP_ENVIRONMENT.
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    )?;

    if settings.llm.api_key.is_none() {
        tracing::warn!("AI_GATEWAY_API_KEY is not configured; analysis and chat requests will fail");
    }

    let llm_client = Arc::new(GatewayLlmClient::from_settings(&settings.llm));
    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let router = create_router(AppState::new(llm_client, settings));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
