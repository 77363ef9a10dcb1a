use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::domain::{AnalysisResult, ChatMessage, EncodedImage};
use crate::presentation::handlers::types::{AnalyzeRequest, ChatRequest, ChatResponse};
use crate::presentation::{ANALYZE_ECG_PATH, ECG_CHAT_PATH};

use super::ecg_api::{ApiError, EcgApi};

/// [`EcgApi`] over HTTP against a running analysis server.
pub struct HttpEcgApi {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

impl HttpEcgApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error)
                .unwrap_or(text);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl EcgApi for HttpEcgApi {
    async fn analyze(&self, image: &EncodedImage) -> Result<AnalysisResult, ApiError> {
        let body = AnalyzeRequest {
            image: image.as_str().to_string(),
        };
        self.post(ANALYZE_ECG_PATH, &body).await
    }

    async fn chat(
        &self,
        messages: &[ChatMessage],
        analysis: &AnalysisResult,
    ) -> Result<String, ApiError> {
        let body = ChatRequest {
            messages: messages.to_vec(),
            analysis: analysis.clone(),
        };
        let response: ChatResponse = self.post(ECG_CHAT_PATH, &body).await?;
        Ok(response.message)
    }
}
