use std::sync::Arc;

use crate::application::ports::{
    CompletionMessage, CompletionRequest, LlmClient, LlmClientError,
};
use crate::domain::{AnalysisResult, ChatMessage, MessageRole};

const ASSISTANT_INSTRUCTIONS: &str = "You are a helpful AI medical assistant. Explain these ECG results in simple, clear language.
Provide context about what the measurements mean and whether they indicate normal or abnormal heart function.
Always recommend consulting a healthcare professional for serious concerns.
Be reassuring but honest. Keep responses concise and easy to understand.";

/// Stateless relay between the viewer's conversation and the chat model.
/// The conversation is forwarded exactly as received, behind one context
/// message describing the current analysis.
pub struct ChatRelayService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    model: String,
}

impl<L> ChatRelayService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, model: String) -> Self {
        Self { llm_client, model }
    }

    #[tracing::instrument(skip_all, fields(messages = conversation.len()))]
    pub async fn reply(
        &self,
        conversation: &[ChatMessage],
        analysis: &AnalysisResult,
    ) -> Result<String, ChatRelayError> {
        let request = self.build_request(conversation, analysis);

        let reply = self
            .llm_client
            .complete(request)
            .await
            .map_err(ChatRelayError::from)?;

        tracing::info!(reply_chars = reply.len(), "Chat reply relayed");
        Ok(reply)
    }

    pub fn build_request(
        &self,
        conversation: &[ChatMessage],
        analysis: &AnalysisResult,
    ) -> CompletionRequest {
        let mut messages = Vec::with_capacity(conversation.len() + 1);
        messages.push(CompletionMessage::system(build_context(analysis)));
        messages.extend(conversation.iter().map(|message| match message.role {
            MessageRole::User => CompletionMessage::user(message.content.clone()),
            MessageRole::Assistant => CompletionMessage::assistant(message.content.clone()),
        }));

        CompletionRequest {
            model: self.model.clone(),
            messages,
        }
    }
}

/// Context preamble describing `analysis` for the chat model.
pub fn build_context(analysis: &AnalysisResult) -> String {
    let diagnosis = &analysis.diagnosis;

    let mut context = format!(
        "The patient's ECG analysis shows:
- Heart Rate: {} BPM
- PR Interval: {} ms
- QRS Duration: {} ms
- QT Interval: {} ms
- ST Segment: {}
- Diagnosis: {}
",
        analysis.heart_rate,
        analysis.pr_interval,
        analysis.qrs_duration,
        analysis.qt_interval,
        analysis.st_segment,
        diagnosis.status.as_upper(),
    );

    if let Some(condition) = &diagnosis.condition {
        context.push_str(&format!("- Condition: {}\n", condition));
    }

    context.push_str(&format!("- Details: {}\n\n", diagnosis.details));
    context.push_str(ASSISTANT_INSTRUCTIONS);
    context
}

#[derive(Debug, thiserror::Error)]
pub enum ChatRelayError {
    #[error("AI_GATEWAY_API_KEY is not configured")]
    Configuration,
    #[error("Rate limit exceeded. Please try again in a few moments.")]
    RateLimited,
    #[error("AI service credits exhausted. Please contact support.")]
    CreditsExhausted,
    #[error("AI API error: {0}")]
    Upstream(u16),
    #[error("Chat failed: {0}")]
    Completion(LlmClientError),
}

impl From<LlmClientError> for ChatRelayError {
    fn from(error: LlmClientError) -> Self {
        match error {
            LlmClientError::MissingApiKey => ChatRelayError::Configuration,
            LlmClientError::RateLimited => ChatRelayError::RateLimited,
            LlmClientError::QuotaExhausted => ChatRelayError::CreditsExhausted,
            LlmClientError::UpstreamStatus(status) => ChatRelayError::Upstream(status),
            other => ChatRelayError::Completion(other),
        }
    }
}
