#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use statduel_core::{AthleteId, StatSource, StatType, StatduelError};

/// In-memory source keyed by request; unknown keys fail like a 404.
#[derive(Default)]
pub struct FakeSource {
    pub logs: HashMap<AthleteId, Value>,
    pub averages: HashMap<(AthleteId, i32, StatType), Value>,
    pub refs: HashMap<String, Value>,
    pub infos: HashMap<AthleteId, Value>,
    pub bios: HashMap<AthleteId, Value>,
    pub careers: HashMap<AthleteId, Value>,
    pub records: HashMap<AthleteId, Value>,
    pub searches: HashMap<String, Value>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn hit(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn missing(what: impl Into<String>) -> StatduelError {
    StatduelError::HttpStatus {
        status: 404,
        url: what.into(),
    }
}

fn lookup<K: std::hash::Hash + Eq>(
    map: &HashMap<K, Value>,
    key: &K,
    what: String,
) -> Result<Value, StatduelError> {
    map.get(key).cloned().ok_or_else(|| missing(what))
}

#[async_trait]
impl StatSource for FakeSource {
    async fn season_log(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        self.hit(format!("log:{athlete_id}"));
        lookup(&self.logs, &athlete_id, format!("log {athlete_id}"))
    }

    async fn season_averages(
        &self,
        athlete_id: AthleteId,
        season: i32,
        stat_type: StatType,
    ) -> Result<Value, StatduelError> {
        self.hit(format!("avg:{athlete_id}:{season}:{}", stat_type.code()));
        lookup(
            &self.averages,
            &(athlete_id, season, stat_type),
            format!("averages {athlete_id}/{season}"),
        )
    }

    async fn resolve_ref(&self, locator: &str) -> Result<Value, StatduelError> {
        self.hit(format!("ref:{locator}"));
        lookup(&self.refs, &locator.to_string(), locator.to_string())
    }

    async fn athlete_info(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        self.hit(format!("info:{athlete_id}"));
        lookup(&self.infos, &athlete_id, format!("info {athlete_id}"))
    }

    async fn athlete_bio(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        self.hit(format!("bio:{athlete_id}"));
        lookup(&self.bios, &athlete_id, format!("bio {athlete_id}"))
    }

    async fn career_statistics(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        self.hit(format!("career:{athlete_id}"));
        lookup(&self.careers, &athlete_id, format!("career {athlete_id}"))
    }

    async fn records(&self, athlete_id: AthleteId) -> Result<Value, StatduelError> {
        self.hit(format!("records:{athlete_id}"));
        lookup(&self.records, &athlete_id, format!("records {athlete_id}"))
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Value, StatduelError> {
        self.hit(format!("search:{query}:{limit}"));
        lookup(&self.searches, &query.to_string(), format!("search {query}"))
    }
}

pub const BASE: &str = "http://sports.core.api.espn.com/v2/sports/basketball/leagues/nba";

pub fn season_ref(season: i32) -> Value {
    json!({ "$ref": format!("{BASE}/seasons/{season}?lang=en&region=us") })
}

pub fn stats_ref(athlete_id: AthleteId, season: i32, type_code: i32) -> String {
    format!(
        "{BASE}/seasons/{season}/types/{type_code}/athletes/{athlete_id}/statistics/0?lang=en&region=us"
    )
}

pub fn total_block(athlete_id: AthleteId, season: i32, type_code: i32) -> Value {
    json!({
        "type": "total",
        "statistics": { "$ref": stats_ref(athlete_id, season, type_code) }
    })
}

/// Averages document in the flat `categories` shape with suffixed names.
pub fn suffixed_averages(points: f64, minutes: f64) -> Value {
    json!({
        "categories": [
            {
                "name": "general",
                "stats": [
                    { "name": "gamesPlayed", "value": 71.0 },
                    { "name": "minutesPerGame", "value": minutes },
                    { "name": "reboundsPerGame", "value": 7.4 }
                ]
            },
            {
                "name": "offensive",
                "stats": [
                    { "name": "pointsPerGame", "value": points },
                    { "name": "assistsPerGame", "value": 6.9 },
                    { "name": "fieldGoalsMadePerGame", "value": 9.5 },
                    { "name": "fieldGoalsAttemptedPerGame", "value": 19.0 },
                    { "name": "threePointFieldGoalsMadePerGame", "value": 1.0 },
                    { "name": "freeThrowsAttemptedPerGame", "value": 7.0 }
                ]
            }
        ]
    })
}

/// Averages document in the `splits.categories` shape with prefixed names.
pub fn prefixed_averages(points: f64) -> Value {
    json!({
        "splits": {
            "categories": [
                {
                    "name": "offensive",
                    "stats": [
                        { "name": "avgPoints", "value": points },
                        { "name": "avgMinutes", "value": "36.0" },
                        { "name": "avgFieldGoalsAttempted", "value": 20.0 }
                    ]
                }
            ]
        }
    })
}
