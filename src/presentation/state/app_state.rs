use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{ChatRelayService, EnsembleAnalysisService};
use crate::presentation::config::Settings;

pub struct AppState<L>
where
    L: LlmClient,
{
    pub ensemble_service: Arc<EnsembleAnalysisService<L>>,
    pub chat_relay_service: Arc<ChatRelayService<L>>,
    pub settings: Settings,
}

impl<L> AppState<L>
where
    L: LlmClient,
{
    /// Wires both services onto one shared completion client.
    pub fn new(llm_client: Arc<L>, settings: Settings) -> Self {
        let ensemble_service = Arc::new(EnsembleAnalysisService::new(
            Arc::clone(&llm_client),
            settings.llm.analysis_model.clone(),
            settings.llm.image_prefix_chars,
        ));
        let chat_relay_service = Arc::new(ChatRelayService::new(
            llm_client,
            settings.llm.chat_model.clone(),
        ));

        Self {
            ensemble_service,
            chat_relay_service,
            settings,
        }
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            ensemble_service: Arc::clone(&self.ensemble_service),
            chat_relay_service: Arc::clone(&self.chat_relay_service),
            settings: self.settings.clone(),
        }
    }
}
