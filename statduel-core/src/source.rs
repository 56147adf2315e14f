use async_trait::async_trait;

use crate::{StatType, StatduelError, Value};

pub type AthleteId = u64;

/// Upstream statistics provider.
///
/// Every call returns the raw JSON document or the reason it could not be
/// fetched. Callers decide at which granularity a failure degrades to "no
/// data"; implementations never retry.
#[async_trait]
pub trait StatSource: Send + Sync {
    /// Season log enumerating, per season, references to detailed statistics.
    async fn season_log(&self, athlete_id: AthleteId) -> Result<Value, StatduelError>;

    /// Per-game averages for one season and season type.
    async fn season_averages(
        &self,
        athlete_id: AthleteId,
        season: i32,
        stat_type: StatType,
    ) -> Result<Value, StatduelError>;

    /// Follows an absolute reference taken from a season-log document.
    async fn resolve_ref(&self, locator: &str) -> Result<Value, StatduelError>;

    /// Athlete information document (display name, measurements, position).
    async fn athlete_info(&self, athlete_id: AthleteId) -> Result<Value, StatduelError>;

    /// Biography document carrying awards.
    async fn athlete_bio(&self, _athlete_id: AthleteId) -> Result<Value, StatduelError> {
        Err(unsupported("athlete_bio"))
    }

    /// Career statistics snapshot, for domains without seasons.
    async fn career_statistics(&self, _athlete_id: AthleteId) -> Result<Value, StatduelError> {
        Err(unsupported("career_statistics"))
    }

    /// Win/loss record document.
    async fn records(&self, _athlete_id: AthleteId) -> Result<Value, StatduelError> {
        Err(unsupported("records"))
    }

    /// Free-text athlete search.
    async fn search(&self, _query: &str, _limit: usize) -> Result<Value, StatduelError> {
        Err(unsupported("search"))
    }
}

fn unsupported(operation: &str) -> StatduelError {
    StatduelError::InvalidConfig(format!("{operation} is not supported by this source"))
}

#[async_trait]
impl<T> StatSource for std::sync::Arc<T>
where
    T: StatSource + ?Sized,
{
    async fn season_log(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        (**self).season_log(athlete_id).await
    }

    async fn season_averages(
        &self,
        athlete_id: AthleteId,
        season: i32,
        stat_type: StatType,
    ) -> Result<Value, StatduelError> {
        (**self).season_averages(athlete_id, season, stat_type).await
    }

    async fn resolve_ref(&self, locator: &str) -> Result<Value, StatduelError> {
        (**self).resolve_ref(locator).await
    }

    async fn athlete_info(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        (**self).athlete_info(athlete_id).await
    }

    async fn athlete_bio(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        (**self).athlete_bio(athlete_id).await
    }

    async fn career_statistics(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        (**self).career_statistics(athlete_id).await
    }

    async fn records(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        (**self).records(athlete_id).await
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Value, StatduelError> {
        (**self).search(query, limit).await
    }
}
