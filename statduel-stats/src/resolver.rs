//! Season-log resolution.
//!
//! Season logs come in two encodings. The reference form carries, per season
//! entry, statistics blocks whose `$ref`/`href` points at the averages
//! document and embeds the season type (`.../types/{n}/...`). The bare form
//! only exposes season numbers; for those, both season types are requested by
//! constructing the averages location from the identifiers.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use statduel_core::{StatType, TypeSelector};

/// Where the averages document for one season and type lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeasonLocator {
    /// Absolute reference read from the season log.
    Reference(String),
    /// No reference available; build the location from athlete, season and type.
    Derived,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonRef {
    pub season: i32,
    pub stat_type: StatType,
    pub locator: SeasonLocator,
}

fn trailing_int() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/(\d+)/?(?:\?[^/]*)?$").expect("valid regex"))
}

fn types_segment() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"/types/(\d+)(?:/|\?|$)").expect("valid regex"))
}

/// Reads `$ref`, falling back to `href`. Blank references count as absent.
pub fn reference_of(node: &Value) -> Option<&str> {
    node.get("$ref")
        .and_then(Value::as_str)
        .or_else(|| node.get("href").and_then(Value::as_str))
        .filter(|reference| !reference.trim().is_empty())
}

/// Trailing integer path segment of a reference, ignoring any query string.
pub fn trailing_number(reference: &str) -> Option<i32> {
    trailing_int()
        .captures(reference)
        .and_then(|caps| caps[1].parse().ok())
}

/// Season type code embedded as `/types/{n}/` in a statistics reference.
pub fn type_code(reference: &str) -> Option<i32> {
    types_segment()
        .captures(reference)
        .and_then(|caps| caps[1].parse().ok())
}

/// Produces the deduplicated, ordered season references selected by `selector`.
///
/// An absent or malformed document resolves to nothing. The encoding is read
/// from the document's shape: any entry carrying a `statistics` array selects
/// the reference encoding, even if every block in it is later dropped.
pub fn resolve(document: &Value, selector: TypeSelector) -> Vec<SeasonRef> {
    let found = if uses_reference_encoding(document) {
        by_reference(document)
    } else {
        by_season_number(document)
    };

    let mut unique: BTreeMap<(i32, StatType), SeasonRef> = BTreeMap::new();
    for season_ref in found {
        if !selector.matches(season_ref.stat_type) {
            tracing::debug!(
                season = season_ref.season,
                stat_type = ?season_ref.stat_type,
                "skip: filtered by type"
            );
            continue;
        }
        unique
            .entry((season_ref.season, season_ref.stat_type))
            .or_insert(season_ref);
    }
    unique.into_values().collect()
}

fn entries(document: &Value) -> &[Value] {
    document
        .get("entries")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn uses_reference_encoding(document: &Value) -> bool {
    entries(document)
        .iter()
        .any(|entry| entry.get("statistics").is_some_and(Value::is_array))
}

fn by_reference(document: &Value) -> Vec<SeasonRef> {
    let mut out = Vec::new();
    for entry in entries(document) {
        let Some(season) = entry
            .get("season")
            .and_then(reference_of)
            .and_then(trailing_number)
            .filter(|season| *season > 0)
        else {
            tracing::debug!("skip: entry without parseable season reference");
            continue;
        };
        let Some(blocks) = entry.get("statistics").and_then(Value::as_array) else {
            tracing::debug!(season, "skip: no statistics array");
            continue;
        };

        for block in blocks {
            let kind = block.get("type").and_then(Value::as_str).unwrap_or("");
            if !kind.eq_ignore_ascii_case("total") {
                tracing::debug!(season, kind, "skip: block is not a season total");
                continue;
            }
            let Some(reference) = block.get("statistics").and_then(reference_of) else {
                tracing::debug!(season, "skip: empty statistics reference");
                continue;
            };
            let Some(stat_type) = type_code(reference).and_then(StatType::from_code) else {
                tracing::debug!(season, reference, "skip: unsupported season type");
                continue;
            };
            out.push(SeasonRef {
                season,
                stat_type,
                locator: SeasonLocator::Reference(reference.to_string()),
            });
        }
    }
    out
}

fn season_number(node: &Value) -> Option<i32> {
    if let Some(number) = node.as_i64() {
        return i32::try_from(number).ok();
    }
    if let Some(year) = node.get("year").and_then(Value::as_i64) {
        return i32::try_from(year).ok();
    }
    reference_of(node).and_then(trailing_number)
}

fn by_season_number(document: &Value) -> Vec<SeasonRef> {
    let from_entries = entries(document)
        .iter()
        .filter_map(|entry| entry.get("season"))
        .filter_map(season_number);
    let from_seasons = document
        .get("seasons")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(season_number);

    let seasons: BTreeSet<i32> = from_entries
        .chain(from_seasons)
        .filter(|season| *season > 0)
        .collect();

    seasons
        .into_iter()
        .flat_map(|season| {
            StatType::ALL.into_iter().map(move |stat_type| SeasonRef {
                season,
                stat_type,
                locator: SeasonLocator::Derived,
            })
        })
        .collect()
}
