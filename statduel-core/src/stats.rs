use serde::{Deserialize, Serialize};

use crate::StatduelError;

/// Season type discriminant. Ordering places regular season first.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatType {
    #[default]
    Regular,
    Playoff,
}

impl StatType {
    pub const ALL: [StatType; 2] = [StatType::Regular, StatType::Playoff];

    /// Upstream numeric code: 2 = regular season, 3 = postseason.
    pub fn code(self) -> i32 {
        match self {
            StatType::Regular => 2,
            StatType::Playoff => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            2 => Some(StatType::Regular),
            3 => Some(StatType::Playoff),
            _ => None,
        }
    }
}

/// Which season types a statistics request covers.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeSelector {
    #[default]
    All,
    Only(StatType),
}

impl TypeSelector {
    pub fn matches(self, stat_type: StatType) -> bool {
        match self {
            TypeSelector::All => true,
            TypeSelector::Only(wanted) => wanted == stat_type,
        }
    }

    /// 0 = both types, 2 = regular season, 3 = playoffs.
    pub fn from_code(code: i32) -> Result<Self, StatduelError> {
        if code == 0 {
            return Ok(TypeSelector::All);
        }
        StatType::from_code(code)
            .map(TypeSelector::Only)
            .ok_or_else(|| StatduelError::InvalidConfig(format!("unknown stat type code {code}")))
    }
}

/// Canonical per-game statistics for one athlete, season and season type.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatRecord {
    pub season: i32,
    pub stat_type: StatType,
    pub games_played: u32,
    pub minutes: f64,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub three_pointers_made: f64,
    pub three_pointers_attempted: f64,
    pub free_throws_made: f64,
    pub free_throws_attempted: f64,
    pub true_shooting: Option<f64>,
    pub effective_field_goal: Option<f64>,
    pub per75_points: Option<f64>,
    pub per75_assists: Option<f64>,
    pub per75_rebounds: Option<f64>,
}

impl SeasonStatRecord {
    /// Field-goal percentage for the season, if any shots were attempted.
    pub fn field_goal_pct(&self) -> Option<f64> {
        (self.field_goals_attempted > 0.0)
            .then(|| self.field_goals_made / self.field_goals_attempted * 100.0)
    }
}

/// Career statistics snapshot for a fighter.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FighterStats {
    pub takedown_accuracy: f64,
    pub strikes_landed_per_minute: f64,
    pub strike_accuracy: f64,
    pub takedown_average: f64,
    pub submission_average: f64,
    pub ko_percentage: f64,
    pub tko_percentage: f64,
    pub decision_percentage: f64,
}

/// Win/loss/draw record parsed from a `W-L-D` summary.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FightRecord {
    pub summary: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_rate: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FighterProfile {
    pub name: String,
    pub nickname: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub reach: Option<String>,
    pub weight_class: Option<String>,
    pub stance: Option<String>,
    pub styles: Option<String>,
    pub country: Option<String>,
    pub age: Option<u32>,
    pub headshot_url: Option<String>,
    pub accolades: Option<String>,
    pub record: Option<FightRecord>,
}

/// One athlete returned by a search.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: u64,
    pub name: String,
    pub sport: String,
    /// Team for players, weight class for fighters.
    pub subtitle: String,
    pub headshot_url: Option<String>,
    pub position: Option<String>,
    pub display_height: Option<String>,
    pub display_weight: Option<String>,
    pub nickname: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Award {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Accolades {
    pub player_name: String,
    pub awards: Vec<Award>,
}
