use async_trait::async_trait;

use crate::{PromptPair, StatduelError};

/// Text-completion service taking a system/user prompt pair.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &PromptPair) -> Result<String, StatduelError>;
}

#[async_trait]
impl<T> CompletionClient for std::sync::Arc<T>
where
    T: CompletionClient + ?Sized,
{
    async fn complete(&self, prompt: &PromptPair) -> Result<String, StatduelError> {
        (**self).complete(prompt).await
    }
}
