mod gateway_client;
mod mock_llm_client;

pub use gateway_client::GatewayLlmClient;
pub use mock_llm_client::MockLlmClient;
