use std::sync::Arc;

use crate::application::ports::{
    CompletionMessage, CompletionRequest, LlmClient, LlmClientError,
};
use crate::domain::{AnalysisResult, EncodedImage, ModelOpinion, Persona};
use crate::infrastructure::observability::sanitize_prompt;

use super::ensemble_aggregator::aggregate_opinions;
use super::json_extraction::extract_json_object;
use super::waveform_generator::generate_waveform;

/// Asks the completion model for three persona opinions on one ECG image
/// and folds them into a single [`AnalysisResult`]. Holds no per-request
/// state, so one instance serves every request.
pub struct EnsembleAnalysisService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    model: String,
    image_prefix_chars: usize,
}

impl<L> EnsembleAnalysisService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, model: String, image_prefix_chars: usize) -> Self {
        Self {
            llm_client,
            model,
            image_prefix_chars,
        }
    }

    #[tracing::instrument(skip(self, image), fields(image_chars = image.as_str().len()))]
    pub async fn analyze(&self, image: &EncodedImage) -> Result<AnalysisResult, EnsembleError> {
        tracing::info!(model = %self.model, "Starting ensemble ECG analysis");

        let (cnn, bilstm, transformer) = futures::future::try_join3(
            self.consult(Persona::Cnn, image),
            self.consult(Persona::BiLstm, image),
            self.consult(Persona::Transformer, image),
        )
        .await?;

        let result = aggregate_opinions(&[cnn, bilstm, transformer], generate_waveform());

        tracing::info!(
            status = %result.diagnosis.status,
            agreement = result.diagnosis.ensemble_agreement.as_deref().unwrap_or_default(),
            "Ensemble results aggregated"
        );

        Ok(result)
    }

    /// Outbound request for one persona; exposed so callers can inspect the
    /// exact payload.
    pub fn build_request(&self, persona: Persona, image: &EncodedImage) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                CompletionMessage::system(persona.system_prompt()),
                CompletionMessage::user(format!(
                    "Analyze this ECG image and provide detailed measurements. Image data: {}...",
                    image.prefix(self.image_prefix_chars)
                )),
            ],
        }
    }

    async fn consult(
        &self,
        persona: Persona,
        image: &EncodedImage,
    ) -> Result<ModelOpinion, EnsembleError> {
        let content = self
            .llm_client
            .complete(self.build_request(persona, image))
            .await
            .map_err(|source| {
                tracing::error!(persona = %persona, error = %source, "Persona analysis request failed");
                EnsembleError::from_completion(persona, source)
            })?;

        let opinion = parse_opinion(&content).map_err(|source| {
            tracing::error!(
                persona = %persona,
                error = %source,
                content = %sanitize_prompt(&content),
                "Failed to parse persona response"
            );
            EnsembleError::Parse { persona, source }
        })?;

        tracing::info!(persona = %persona, "Persona analysis completed");
        Ok(opinion)
    }
}

/// Finds the first JSON object in a model reply and reads it as an opinion.
pub fn parse_opinion(content: &str) -> Result<ModelOpinion, OpinionParseError> {
    let json = extract_json_object(content).ok_or(OpinionParseError::NoJsonFound)?;
    serde_json::from_str(json).map_err(OpinionParseError::InvalidJson)
}

#[derive(Debug, thiserror::Error)]
pub enum OpinionParseError {
    #[error("no JSON object found")]
    NoJsonFound,
    #[error("invalid opinion JSON: {0}")]
    InvalidJson(serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum EnsembleError {
    #[error("{0}")]
    Configuration(LlmClientError),
    #[error("{persona} analysis failed: {detail}")]
    Persona {
        persona: Persona,
        detail: String,
        source: LlmClientError,
    },
    #[error("{persona} parsing failed")]
    Parse {
        persona: Persona,
        source: OpinionParseError,
    },
}

impl EnsembleError {
    fn from_completion(persona: Persona, source: LlmClientError) -> Self {
        if matches!(source, LlmClientError::MissingApiKey) {
            return EnsembleError::Configuration(source);
        }

        let detail = source
            .upstream_status()
            .map(|status| status.to_string())
            .unwrap_or_else(|| source.to_string());

        EnsembleError::Persona {
            persona,
            detail,
            source,
        }
    }
}
