//! Career snapshot statistics, records and profiles for fighters.

use serde_json::Value;
use statduel_core::{AthleteId, FightRecord, FighterProfile, FighterStats, StatSource};

use crate::fetch::or_absent;
use crate::lookup::{find_any, stat_categories};

#[derive(Clone, Debug)]
pub struct FighterStatsService<S> {
    source: S,
}

impl<S> FighterStatsService<S>
where
    S: StatSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// `None` is the "no statistics available" condition.
    pub async fn career_stats(&self, fighter_id: AthleteId) -> Option<FighterStats> {
        let document = or_absent(
            self.source.career_statistics(fighter_id).await,
            "fighter statistics",
        )?;
        let stats = map_fighter_stats(&document);
        if stats.is_none() {
            tracing::warn!(fighter_id, "no categories found in fighter statistics");
        }
        stats
    }

    pub async fn record(&self, fighter_id: AthleteId) -> Option<FightRecord> {
        let document = or_absent(self.source.records(fighter_id).await, "fight records")?;
        parse_record_document(&document)
    }

    /// Profile with the fight record attached when it can be fetched.
    pub async fn profile(&self, fighter_id: AthleteId) -> Option<FighterProfile> {
        let info = or_absent(self.source.athlete_info(fighter_id).await, "fighter info")?;
        Some(self.profile_from_info(fighter_id, &info).await)
    }

    /// Same as [`profile`](Self::profile) for an info document already in hand.
    pub async fn profile_from_info(&self, fighter_id: AthleteId, info: &Value) -> FighterProfile {
        let mut profile = map_profile(info);
        profile.record = self.record(fighter_id).await;
        profile
    }
}

pub fn map_fighter_stats(document: &Value) -> Option<FighterStats> {
    let categories = stat_categories(document)?;
    let read = |name: &str| find_any(categories, &[name]);
    Some(FighterStats {
        takedown_accuracy: read("takedownAccuracy"),
        strikes_landed_per_minute: read("strikeLPM"),
        strike_accuracy: read("strikeAccuracy"),
        takedown_average: read("takedownAvg"),
        submission_average: read("submissionAvg"),
        ko_percentage: read("koPercentage"),
        tko_percentage: read("tkoPercentage"),
        decision_percentage: read("decisionPercentage"),
    })
}

/// Reads the first `items[].summary` of a records document.
pub fn parse_record_document(document: &Value) -> Option<FightRecord> {
    let summary = document
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|item| item.get("summary"))
        .and_then(Value::as_str)
        .filter(|summary| !summary.trim().is_empty())?;
    Some(parse_record(summary))
}

/// Parses a `W-L` or `W-L-D` summary. Unparseable summaries keep the raw
/// text with zero counts.
pub fn parse_record(summary: &str) -> FightRecord {
    let mut record = FightRecord {
        summary: summary.to_string(),
        ..FightRecord::default()
    };

    let parts: Vec<&str> = summary.split('-').map(str::trim).collect();
    if parts.len() < 2 {
        return record;
    }
    let parsed = (
        parts[0].parse::<u32>(),
        parts[1].parse::<u32>(),
        parts.get(2).map_or(Ok(0), |draws| draws.parse::<u32>()),
    );
    let (Ok(wins), Ok(losses), Ok(draws)) = parsed else {
        tracing::warn!(summary, "failed to parse fight record");
        return record;
    };

    record.wins = wins;
    record.losses = losses;
    record.draws = draws;
    let total = wins + losses + draws;
    if total > 0 {
        record.win_rate = Some(f64::from(wins) * 100.0 / f64::from(total));
    }
    record
}

fn text(node: &Value, key: &str) -> Option<String> {
    node.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

fn reach_of(info: &Value) -> Option<String> {
    text(info, "displayReach").or_else(|| {
        info.get("displayMeasurements")
            .and_then(Value::as_array)?
            .iter()
            .find(|measurement| {
                measurement
                    .get("type")
                    .and_then(Value::as_str)
                    .is_some_and(|kind| kind.eq_ignore_ascii_case("reach"))
            })
            .and_then(|measurement| text(measurement, "displayValue"))
    })
}

pub fn map_profile(info: &Value) -> FighterProfile {
    FighterProfile {
        name: text(info, "displayName").unwrap_or_default(),
        nickname: text(info, "nickname"),
        height: text(info, "displayHeight"),
        weight: text(info, "displayWeight"),
        reach: reach_of(info),
        weight_class: info.get("weightClass").and_then(|class| text(class, "text")),
        stance: text(info, "stance"),
        styles: text(info, "styles"),
        country: text(info, "citizenship"),
        age: info
            .get("age")
            .and_then(Value::as_u64)
            .and_then(|age| u32::try_from(age).ok()),
        headshot_url: info.get("headshot").and_then(|headshot| text(headshot, "href")),
        accolades: text(info, "accolades"),
        record: None,
    }
}
