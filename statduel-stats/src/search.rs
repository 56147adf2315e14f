//! Athlete search with best-effort profile enrichment.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use statduel_core::{SearchHit, Sport, StatSource};

use crate::fetch::or_absent;

fn uid_athlete() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"a:(\d+)").expect("valid regex"))
}

/// Athlete id embedded in a search `uid` such as `s:40~l:46~a:1966`.
pub fn parse_athlete_id(uid: &str) -> Option<u64> {
    uid_athlete()
        .captures(uid)
        .and_then(|caps| caps[1].parse().ok())
        .filter(|id| *id > 0)
}

pub fn result_limit(sport: Sport) -> usize {
    match sport {
        Sport::Basketball => 20,
        Sport::Mma => 50,
    }
}

fn str_field<'a>(node: &'a Value, key: &str) -> &'a str {
    node.get(key).and_then(Value::as_str).unwrap_or("")
}

fn sport_matches(sport: Sport, content: &Value) -> bool {
    let content_sport = str_field(content, "sport");
    match sport {
        Sport::Basketball => {
            content_sport.eq_ignore_ascii_case("basketball")
                || str_field(content, "defaultLeagueSlug").eq_ignore_ascii_case("nba")
        }
        Sport::Mma => content_sport.eq_ignore_ascii_case("mma"),
    }
}

/// Maps the player blocks of a search document into hits for `sport`.
pub fn parse_search_results(document: &Value, sport: Sport) -> Vec<SearchHit> {
    document
        .get("results")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|block| str_field(block, "type").eq_ignore_ascii_case("player"))
        .filter_map(|block| block.get("contents").and_then(Value::as_array))
        .flatten()
        .filter(|content| sport_matches(sport, content))
        .filter_map(|content| {
            let id = parse_athlete_id(str_field(content, "uid"))?;
            let headshot = content
                .get("image")
                .map(|image| str_field(image, "default"))
                .filter(|url| !url.is_empty())
                .map(ToOwned::to_owned);
            Some(SearchHit {
                id,
                name: str_field(content, "displayName").to_string(),
                sport: match sport {
                    Sport::Basketball => "nba".to_string(),
                    Sport::Mma => str_field(content, "sport").to_string(),
                },
                subtitle: str_field(content, "subtitle").to_string(),
                headshot_url: headshot,
                ..SearchHit::default()
            })
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Copies the sport-relevant profile details from an athlete-info document.
pub fn enrich(hit: &mut SearchHit, sport: Sport, info: &Value) {
    match sport {
        Sport::Basketball => {
            let position = info
                .get("position")
                .map(|position| str_field(position, "abbreviation"))
                .unwrap_or("");
            hit.position = non_empty(position).or(hit.position.take());
            hit.display_height =
                non_empty(str_field(info, "displayHeight")).or(hit.display_height.take());
            hit.display_weight =
                non_empty(str_field(info, "displayWeight")).or(hit.display_weight.take());
        }
        Sport::Mma => {
            hit.nickname = non_empty(str_field(info, "nickname")).or(hit.nickname.take());
        }
    }
}

#[derive(Clone, Debug)]
pub struct AthleteSearch<S> {
    source: S,
    sport: Sport,
}

impl<S> AthleteSearch<S>
where
    S: StatSource,
{
    pub fn new(source: S, sport: Sport) -> Self {
        Self { source, sport }
    }

    /// Blank queries return nothing without touching the source.
    pub async fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let Some(document) = or_absent(
            self.source.search(query, result_limit(self.sport)).await,
            "search results",
        ) else {
            return Vec::new();
        };

        let mut hits = parse_search_results(&document, self.sport);
        for hit in &mut hits {
            if let Some(info) = or_absent(self.source.athlete_info(hit.id).await, "athlete info") {
                enrich(hit, self.sport, &info);
            }
        }
        hits
    }
}
