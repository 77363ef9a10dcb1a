use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::application::ports::LlmClient;
use crate::domain::MessageRole;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiErrorResponse;
use super::types::{ChatRequest, ChatResponse};

#[tracing::instrument(skip_all)]
pub async fn ecg_chat_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiErrorResponse>
where
    L: LlmClient + 'static,
{
    let Json(request) = payload.inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected chat request body");
    })?;

    let latest_question = request
        .messages
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::User)
        .map(|m| m.content.as_str())
        .unwrap_or_default();

    tracing::debug!(
        prompt = %sanitize_prompt(latest_question),
        history = request.messages.len(),
        "Processing ECG chat"
    );

    match state
        .chat_relay_service
        .reply(&request.messages, &request.analysis)
        .await
    {
        Ok(message) => Ok(Json(ChatResponse { message })),
        Err(e) => {
            tracing::error!(error = %e, "Error in ECG chat");
            Err(e.into())
        }
    }
}
