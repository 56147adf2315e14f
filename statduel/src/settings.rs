use std::time::Duration;

use statduel_core::StatduelError;
use statduel_espn::{EspnClient, EspnClientBuilder};
use statduel_llm::{OpenAiCompatibleBuilder, OpenAiCompatibleClient};

pub const NBA_API_BASE: &str = "STATDUEL_NBA_API_BASE";
pub const NBA_WEB_BASE: &str = "STATDUEL_NBA_WEB_BASE";
pub const MMA_API_BASE: &str = "STATDUEL_MMA_API_BASE";
pub const MMA_LEAGUE_BASE: &str = "STATDUEL_MMA_LEAGUE_BASE";
pub const SEARCH_BASE: &str = "STATDUEL_SEARCH_BASE";
pub const HTTP_TIMEOUT_MS: &str = "STATDUEL_HTTP_TIMEOUT_MS";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_TEMPERATURE: &str = "OPENAI_TEMPERATURE";
pub const OPENAI_MAX_TOKENS: &str = "OPENAI_MAX_TOKENS";

/// Client configuration gathered from the environment.
///
/// Required values are only checked when the matching client is built, so a
/// statistics-only run does not need an API key.
#[derive(Clone, Debug)]
pub struct Settings {
    nba: EspnClientBuilder,
    mma: EspnClientBuilder,
    completion: OpenAiCompatibleBuilder,
}

impl Settings {
    pub fn from_env() -> Result<Self, StatduelError> {
        let nba = EspnClientBuilder::new()
            .core_base_from_env(NBA_API_BASE)
            .web_base_from_env(NBA_WEB_BASE)
            .search_base_from_env(SEARCH_BASE)
            .timeout_from_env(HTTP_TIMEOUT_MS);
        let mma = EspnClientBuilder::new()
            .core_base_from_env(MMA_API_BASE)
            .league_base_from_env(MMA_LEAGUE_BASE)
            .search_base_from_env(SEARCH_BASE)
            .timeout_from_env(HTTP_TIMEOUT_MS);
        let completion = OpenAiCompatibleBuilder::new()
            .api_key_from_env(OPENAI_API_KEY)
            .base_url_from_env(OPENAI_BASE_URL)?
            .model_from_env(OPENAI_MODEL)
            .temperature_from_env(OPENAI_TEMPERATURE)
            .max_tokens_from_env(OPENAI_MAX_TOKENS);
        Ok(Self {
            nba,
            mma,
            completion,
        })
    }

    /// Replaces the model read from `OPENAI_MODEL`.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.completion = self.completion.model(model);
        self
    }

    /// Replaces the ESPN timeout read from `STATDUEL_HTTP_TIMEOUT_MS`.
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.nba = self.nba.timeout(timeout);
        self.mma = self.mma.timeout(timeout);
        self
    }

    pub fn nba_client(&self) -> Result<EspnClient, StatduelError> {
        Ok(self.nba.clone().build()?)
    }

    pub fn mma_client(&self) -> Result<EspnClient, StatduelError> {
        Ok(self.mma.clone().build()?)
    }

    pub fn completion_client(&self) -> Result<OpenAiCompatibleClient, StatduelError> {
        self.completion.clone().build()
    }
}
