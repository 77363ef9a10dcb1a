use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::application::ports::LlmClient;
use crate::domain::{AnalysisResult, EncodedImage};
use crate::presentation::state::AppState;

use super::error::ApiErrorResponse;
use super::types::AnalyzeRequest;

#[tracing::instrument(skip_all)]
pub async fn analyze_ecg_handler<L>(
    State(state): State<AppState<L>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiErrorResponse>
where
    L: LlmClient + 'static,
{
    let Json(request) = payload.inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected analyze request body");
    })?;

    let image = EncodedImage::new(request.image);
    if image.is_empty() {
        tracing::warn!("Analyze request with empty image");
        return Err(ApiErrorResponse::bad_request("No image provided"));
    }

    match state.ensemble_service.analyze(&image).await {
        Ok(analysis) => {
            tracing::info!("ECG analysis successful");
            Ok(Json(analysis))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error in ECG analysis");
            Err(e.into())
        }
    }
}
