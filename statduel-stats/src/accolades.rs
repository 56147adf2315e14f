//! Awards from the athlete biography, ordered by prestige.

use serde_json::Value;
use statduel_core::{Accolades, AthleteId, Award, StatSource};

use crate::fetch::or_absent;

pub const UNKNOWN_PLAYER: &str = "Unknown Player";

enum Rule {
    Any(&'static [&'static str]),
    /// Regular-season MVP, excluding finals and All-Star MVPs.
    SeasonMvp,
}

impl Rule {
    fn matches(&self, title: &str) -> bool {
        match self {
            Rule::Any(needles) => needles.iter().any(|needle| title.contains(needle)),
            Rule::SeasonMvp => {
                title.contains("mvp") && !title.contains("finals") && !title.contains("all-star")
            }
        }
    }
}

/// Checked in order against the lowercased title; lower ranks sort first.
const PRESTIGE: &[(Rule, u8)] = &[
    (Rule::Any(&["champion"]), 1),
    (Rule::Any(&["finals mvp"]), 2),
    (Rule::SeasonMvp, 3),
    (Rule::Any(&["all-nba 1st"]), 4),
    (Rule::Any(&["all-nba 2nd"]), 5),
    (Rule::Any(&["all-nba 3rd"]), 6),
    (Rule::Any(&["defensive player of the year"]), 7),
    (Rule::Any(&["all-defensive 1st"]), 8),
    (Rule::Any(&["all-defensive 2nd"]), 9),
    (Rule::Any(&["all-star mvp"]), 10),
    (Rule::Any(&["all-star"]), 11),
    (Rule::Any(&["scoring"]), 12),
    (Rule::Any(&["assists"]), 13),
    (Rule::Any(&["rebounds"]), 14),
    (Rule::Any(&["rookie of the year"]), 15),
    (Rule::Any(&["all-rookie 1st"]), 16),
    (Rule::Any(&["all-rookie 2nd"]), 17),
    (Rule::Any(&["sixth man"]), 18),
    (Rule::Any(&["most improved"]), 19),
    (Rule::Any(&["nba cup", "tournament"]), 20),
];

const OTHER_AWARD: u8 = 99;

/// Prestige rank of an award title.
pub fn award_priority(title: &str) -> u8 {
    let title = title.to_lowercase();
    PRESTIGE
        .iter()
        .find(|(rule, _)| rule.matches(&title))
        .map_or(OTHER_AWARD, |(_, rank)| *rank)
}

/// Extracts titled awards from a bio document, ordered by prestige.
pub fn parse_awards(bio: &Value) -> Vec<Award> {
    let mut awards: Vec<Award> = bio
        .get("awards")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|award| {
            let name = award.get("name").and_then(Value::as_str).unwrap_or("");
            let count = award
                .get("displayCount")
                .and_then(Value::as_str)
                .unwrap_or("");
            let title = if count.is_empty() {
                name.to_string()
            } else {
                format!("{count} {name}")
            };
            if title.trim().is_empty() {
                return None;
            }
            let description = award
                .get("seasons")
                .and_then(Value::as_array)
                .map(|seasons| {
                    seasons
                        .iter()
                        .map(|season| match season {
                            Value::String(text) => text.clone(),
                            other => other.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            Some(Award { title, description })
        })
        .collect();

    awards.sort_by_key(|award| award_priority(&award.title));
    awards
}

#[derive(Clone, Debug)]
pub struct AccoladesService<S> {
    source: S,
}

impl<S> AccoladesService<S>
where
    S: StatSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn accolades(&self, athlete_id: AthleteId) -> Accolades {
        let Some(bio) = or_absent(self.source.athlete_bio(athlete_id).await, "athlete bio") else {
            return Accolades {
                player_name: UNKNOWN_PLAYER.to_string(),
                awards: Vec::new(),
            };
        };

        let player_name = or_absent(self.source.athlete_info(athlete_id).await, "athlete info")
            .and_then(|info| {
                info.get("displayName")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned)
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string());

        let awards = parse_awards(&bio);
        tracing::info!(athlete_id, awards = awards.len(), "parsed accolades");
        Accolades {
            player_name,
            awards,
        }
    }
}
