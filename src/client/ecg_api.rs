use async_trait::async_trait;

use crate::domain::{AnalysisResult, ChatMessage, EncodedImage};

/// The two backend endpoints as seen from the viewer.
#[async_trait]
pub trait EcgApi: Send + Sync {
    async fn analyze(&self, image: &EncodedImage) -> Result<AnalysisResult, ApiError>;

    async fn chat(
        &self,
        messages: &[ChatMessage],
        analysis: &AnalysisResult,
    ) -> Result<String, ApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
