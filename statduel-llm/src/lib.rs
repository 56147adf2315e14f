//! OpenAI-compatible completion client.
//!
//! Works against any provider exposing `POST {base}/v1/chat/completions`
//! (OpenAI, DeepSeek, Together, local gateways).

pub mod openai_compatible;

pub use openai_compatible::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OpenAiCompatibleBuilder,
    OpenAiCompatibleClient, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT,
};
