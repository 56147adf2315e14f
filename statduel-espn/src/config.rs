use std::fmt;
use std::time::Duration;

use crate::{EspnClient, EspnError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Clone, Default)]
pub struct EspnClientBuilder {
    core_base: Option<String>,
    web_base: Option<String>,
    league_base: Option<String>,
    search_base: Option<String>,
    timeout: Option<Duration>,
}

impl fmt::Debug for EspnClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EspnClientBuilder")
            .field("core_base", &self.core_base)
            .field("web_base", &self.web_base)
            .field("league_base", &self.league_base)
            .field("search_base", &self.search_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl EspnClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn core_base(mut self, value: impl Into<String>) -> Self {
        self.core_base = Some(value.into());
        self
    }

    pub fn web_base(mut self, value: impl Into<String>) -> Self {
        self.web_base = non_blank(value.into());
        self
    }

    pub fn league_base(mut self, value: impl Into<String>) -> Self {
        self.league_base = non_blank(value.into());
        self
    }

    pub fn search_base(mut self, value: impl Into<String>) -> Self {
        self.search_base = non_blank(value.into());
        self
    }

    /// Connect and read timeout applied to every request.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    pub fn core_base_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.core_base = Some(value);
        }
        self
    }

    pub fn web_base_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.web_base = non_blank(value);
        }
        self
    }

    pub fn league_base_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.league_base = non_blank(value);
        }
        self
    }

    pub fn search_base_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.search_base = non_blank(value);
        }
        self
    }

    /// Reads the timeout in milliseconds; unparseable values are ignored.
    pub fn timeout_from_env(mut self, var_name: &str) -> Self {
        match std::env::var(var_name).map(|raw| raw.trim().parse::<u64>()) {
            Ok(Ok(millis)) => self.timeout = Some(Duration::from_millis(millis)),
            Ok(Err(err)) => {
                tracing::warn!(var = var_name, error = %err, "ignoring unparseable timeout");
            }
            Err(_) => {}
        }
        self
    }

    pub fn build(self) -> Result<EspnClient, EspnError> {
        let core_base = self
            .core_base
            .ok_or_else(|| EspnError::Config("core_base is required".to_string()))?;
        if core_base.trim().is_empty() {
            return Err(EspnError::Config("core_base cannot be empty".to_string()));
        }
        for base in [
            Some(&core_base),
            self.web_base.as_ref(),
            self.league_base.as_ref(),
            self.search_base.as_ref(),
        ]
        .into_iter()
        .flatten()
        {
            url::Url::parse(base)
                .map_err(|err| EspnError::Config(format!("invalid base url '{base}': {err}")))?;
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|err| EspnError::Config(err.to_string()))?;

        Ok(EspnClient::new(
            http,
            core_base,
            self.web_base,
            self.league_base,
            self.search_base,
            timeout,
        ))
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
