use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use statduel_core::{AthleteId, StatSource, StatType, StatduelError};

use crate::{EspnClientBuilder, EspnError};

/// HTTP client for the ESPN statistics APIs.
///
/// One instance serves one sport: the core base decides whether season logs,
/// fighter statistics or both are reachable.
#[derive(Clone, Debug)]
pub struct EspnClient {
    http: Client,
    core_base: String,
    web_base: Option<String>,
    league_base: Option<String>,
    search_base: Option<String>,
    timeout: Duration,
}

impl EspnClient {
    pub fn builder() -> EspnClientBuilder {
        EspnClientBuilder::new()
    }

    pub(crate) fn new(
        http: Client,
        core_base: String,
        web_base: Option<String>,
        league_base: Option<String>,
        search_base: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            core_base,
            web_base,
            league_base,
            search_base,
            timeout,
        }
    }

    pub fn core_base(&self) -> &str {
        &self.core_base
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn core_url(&self, path: &str) -> String {
        join(&self.core_base, path)
    }

    fn optional_url(base: Option<&str>, name: &str, path: &str) -> Result<String, EspnError> {
        base.map(|base| join(base, path))
            .ok_or_else(|| EspnError::Config(format!("{name} is not configured")))
    }

    pub async fn get_json(&self, url: &str) -> Result<Value, EspnError> {
        self.get_json_with_query(url, &[]).await
    }

    pub async fn get_json_with_query(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, EspnError> {
        tracing::debug!(url, "espn GET");
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                EspnError::Timeout {
                    url: url.to_string(),
                    timeout: self.timeout,
                }
            } else {
                EspnError::Transport {
                    url: url.to_string(),
                    message: err.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EspnError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| EspnError::Malformed {
                url: url.to_string(),
                message: err.to_string(),
            })
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait]
impl StatSource for EspnClient {
    async fn season_log(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        let url = self.core_url(&format!(
            "athletes/{athlete_id}/statisticslog?region=us&lang=en"
        ));
        Ok(self.get_json(&url).await?)
    }

    async fn season_averages(
        &self,
        athlete_id: AthleteId,
        season: i32,
        stat_type: StatType,
    ) -> Result<Value, StatduelError> {
        let url = self.core_url(&format!(
            "seasons/{season}/types/{}/athletes/{athlete_id}/statistics/0?region=us&lang=en",
            stat_type.code()
        ));
        Ok(self.get_json(&url).await?)
    }

    async fn resolve_ref(&self, locator: &str) -> Result<Value, StatduelError> {
        url::Url::parse(locator)
            .map_err(|err| EspnError::Config(format!("invalid reference '{locator}': {err}")))?;
        Ok(self.get_json(locator).await?)
    }

    async fn athlete_info(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        let url = self.core_url(&format!("athletes/{athlete_id}?region=us&lang=en"));
        Ok(self.get_json(&url).await?)
    }

    async fn athlete_bio(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        let url = Self::optional_url(
            self.web_base.as_deref(),
            "web_base",
            &format!("athletes/{athlete_id}/bio"),
        )?;
        Ok(self.get_json(&url).await?)
    }

    async fn career_statistics(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        let url = self.core_url(&format!(
            "athletes/{athlete_id}/statistics?region=us&lang=en"
        ));
        Ok(self.get_json(&url).await?)
    }

    async fn records(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        let url = Self::optional_url(
            self.league_base.as_deref(),
            "league_base",
            &format!("athletes/{athlete_id}/records?lang=en&region=us"),
        )?;
        Ok(self.get_json(&url).await?)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Value, StatduelError> {
        let base = self
            .search_base
            .as_deref()
            .ok_or_else(|| EspnError::Config("search_base is not configured".to_string()))?;
        let params = [("limit", limit.to_string()), ("query", query.to_string())];
        Ok(self.get_json_with_query(base, &params).await?)
    }
}
