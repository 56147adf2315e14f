//! Schema-tolerant statistic lookup.
//!
//! Averages documents nest named values as `category -> stats[] -> {name,
//! value}`, either under `splits.categories` or directly under `categories`,
//! and name the same value either with an `avg` prefix (`avgPoints`) or a
//! `PerGame` suffix (`pointsPerGame`). Both the container shape and the name
//! are resolved by ordered candidate lists where the first match wins.

use serde_json::Value;

/// Locates the category array of a statistics document.
pub type CategoryStrategy = fn(&Value) -> Option<&[Value]>;

/// Container shapes in the order they are tried.
pub const CATEGORY_STRATEGIES: &[CategoryStrategy] = &[categories_from_splits, flat_categories];

fn non_empty(node: Option<&Value>) -> Option<&[Value]> {
    node.and_then(Value::as_array)
        .map(Vec::as_slice)
        .filter(|categories| !categories.is_empty())
}

pub fn categories_from_splits(document: &Value) -> Option<&[Value]> {
    non_empty(document.get("splits").and_then(|splits| splits.get("categories")))
}

pub fn flat_categories(document: &Value) -> Option<&[Value]> {
    non_empty(document.get("categories"))
}

/// The statistics section of a document, or `None` when no known shape is present.
pub fn stat_categories(document: &Value) -> Option<&[Value]> {
    CATEGORY_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(document))
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Case-insensitive lookup of one stat name across all categories.
pub fn find_named(categories: &[Value], name: &str) -> Option<f64> {
    categories
        .iter()
        .filter_map(|category| category.get("stats").and_then(Value::as_array))
        .flatten()
        .filter(|stat| {
            stat.get("name")
                .and_then(Value::as_str)
                .is_some_and(|stat_name| stat_name.eq_ignore_ascii_case(name))
        })
        .find_map(|stat| stat.get("value").and_then(numeric))
}

/// First candidate name with a numeric value wins; absent values read as 0.0.
pub fn find_any(categories: &[Value], candidates: &[&str]) -> f64 {
    candidates
        .iter()
        .find_map(|name| find_named(categories, name))
        .unwrap_or(0.0)
}

/// Per-game basketball fields with their candidate upstream names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonField {
    GamesPlayed,
    Minutes,
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
    Turnovers,
    FieldGoalsMade,
    FieldGoalsAttempted,
    ThreePointersMade,
    ThreePointersAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
}

impl SeasonField {
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            SeasonField::GamesPlayed => &["gamesPlayed"],
            SeasonField::Minutes => &["avgMinutes", "minutesPerGame"],
            SeasonField::Points => &["avgPoints", "pointsPerGame"],
            SeasonField::Assists => &["avgAssists", "assistsPerGame"],
            SeasonField::Rebounds => &["avgRebounds", "reboundsPerGame"],
            SeasonField::Steals => &["avgSteals", "stealsPerGame"],
            SeasonField::Blocks => &["avgBlocks", "blocksPerGame"],
            SeasonField::Turnovers => &["avgTurnovers", "turnoversPerGame"],
            SeasonField::FieldGoalsMade => &["avgFieldGoalsMade", "fieldGoalsMadePerGame"],
            SeasonField::FieldGoalsAttempted => {
                &["avgFieldGoalsAttempted", "fieldGoalsAttemptedPerGame"]
            }
            SeasonField::ThreePointersMade => &[
                "avgThreePointFieldGoalsMade",
                "threePointFieldGoalsMadePerGame",
            ],
            SeasonField::ThreePointersAttempted => &[
                "avgThreePointFieldGoalsAttempted",
                "threePointFieldGoalsAttemptedPerGame",
            ],
            SeasonField::FreeThrowsMade => &["avgFreeThrowsMade", "freeThrowsMadePerGame"],
            SeasonField::FreeThrowsAttempted => {
                &["avgFreeThrowsAttempted", "freeThrowsAttemptedPerGame"]
            }
        }
    }

    /// Non-negative value of this field; absent or negative reads as 0.0.
    pub fn read(self, categories: &[Value]) -> f64 {
        find_any(categories, self.candidates()).max(0.0)
    }
}
