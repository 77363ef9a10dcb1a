mod llm_client;

pub use llm_client::{
    CompletionMessage, CompletionRequest, CompletionRole, LlmClient, LlmClientError,
};
