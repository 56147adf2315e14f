use serde_json::Value;
use statduel_core::{AthleteId, SeasonStatRecord, StatSource, StatType, TypeSelector};

use crate::fetch::or_absent;
use crate::lookup::{stat_categories, SeasonField};
use crate::metrics::{effective_field_goal, per75, true_shooting};
use crate::resolver::{resolve, SeasonLocator, SeasonRef};

/// Builds canonical per-season records for an athlete, one fetch per
/// resolved season and type.
#[derive(Clone, Debug)]
pub struct SeasonStatsAggregator<S> {
    source: S,
}

impl<S> SeasonStatsAggregator<S>
where
    S: StatSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Records ordered by season, regular season before playoffs.
    ///
    /// An empty list means no statistics could be found; it is never an error.
    pub async fn season_stats(
        &self,
        athlete_id: AthleteId,
        selector: TypeSelector,
    ) -> Vec<SeasonStatRecord> {
        let Some(log) = or_absent(self.source.season_log(athlete_id).await, "season log") else {
            return Vec::new();
        };

        let refs = resolve(&log, selector);
        if refs.is_empty() {
            tracing::warn!(athlete_id, "no resolvable seasons");
            return Vec::new();
        }
        tracing::info!(athlete_id, seasons = refs.len(), "fetching season averages");

        let mut records = Vec::with_capacity(refs.len());
        for season_ref in refs {
            let Some(document) = self.fetch_averages(athlete_id, &season_ref).await else {
                continue;
            };
            match map_averages(&document, season_ref.season, season_ref.stat_type) {
                Some(record) => records.push(record),
                None => tracing::debug!(
                    athlete_id,
                    season = season_ref.season,
                    "skip: averages document has no statistics section"
                ),
            }
        }

        records.sort_by_key(|record| (record.season, record.stat_type));
        tracing::info!(athlete_id, rows = records.len(), "season stats aggregated");
        records
    }

    async fn fetch_averages(
        &self,
        athlete_id: AthleteId,
        season_ref: &SeasonRef,
    ) -> Option<Value> {
        let result = match &season_ref.locator {
            SeasonLocator::Reference(reference) => self.source.resolve_ref(reference).await,
            SeasonLocator::Derived => {
                self.source
                    .season_averages(athlete_id, season_ref.season, season_ref.stat_type)
                    .await
            }
        };
        or_absent(result, "season averages")
    }
}

/// Maps an averages document into a record with derived metrics.
///
/// Returns `None` when the document carries no statistics section in any
/// known shape.
pub fn map_averages(
    document: &Value,
    season: i32,
    stat_type: StatType,
) -> Option<SeasonStatRecord> {
    let categories = stat_categories(document)?;
    let read = |field: SeasonField| field.read(categories);

    let minutes = read(SeasonField::Minutes);
    let points = read(SeasonField::Points);
    let assists = read(SeasonField::Assists);
    let rebounds = read(SeasonField::Rebounds);
    let field_goals_made = read(SeasonField::FieldGoalsMade);
    let field_goals_attempted = read(SeasonField::FieldGoalsAttempted);
    let three_pointers_made = read(SeasonField::ThreePointersMade);
    let free_throws_attempted = read(SeasonField::FreeThrowsAttempted);

    Some(SeasonStatRecord {
        season,
        stat_type,
        games_played: read(SeasonField::GamesPlayed).round() as u32,
        minutes,
        points,
        assists,
        rebounds,
        steals: read(SeasonField::Steals),
        blocks: read(SeasonField::Blocks),
        turnovers: read(SeasonField::Turnovers),
        field_goals_made,
        field_goals_attempted,
        three_pointers_made,
        three_pointers_attempted: read(SeasonField::ThreePointersAttempted),
        free_throws_made: read(SeasonField::FreeThrowsMade),
        free_throws_attempted,
        true_shooting: true_shooting(points, field_goals_attempted, free_throws_attempted),
        effective_field_goal: effective_field_goal(
            field_goals_made,
            three_pointers_made,
            field_goals_attempted,
        ),
        per75_points: per75(points, minutes),
        per75_assists: per75(assists, minutes),
        per75_rebounds: per75(rebounds, minutes),
    })
}
