use futures::join;
use serde_json::Value;
use statduel_core::{
    AthleteId, ComparisonResult, CompletionClient, FighterProfile, PromptPair, Sport, StatSource,
    TypeSelector,
};
use statduel_prompt::{ComparisonPromptBuilder, FighterSide, PlayerSide, StructuredResponseParser};
use statduel_stats::fetch::or_absent;
use statduel_stats::{FighterStatsService, SeasonStatsAggregator};
use tracing::Instrument;

/// Analysis text used when the completion service fails.
pub const COMPLETION_FAILURE: &str = "Error: Unable to get response from AI";

/// End-to-end comparison of two athletes.
///
/// Never returns an error: missing statistics produce an "insufficient data"
/// result without calling the completion service, and a failed completion
/// puts [`COMPLETION_FAILURE`] in the analysis field.
#[derive(Clone, Debug)]
pub struct Comparator<S, C> {
    source: S,
    seasons: SeasonStatsAggregator<S>,
    fighters: FighterStatsService<S>,
    completion: C,
    prompts: ComparisonPromptBuilder,
}

impl<S, C> Comparator<S, C>
where
    S: StatSource + Clone,
    C: CompletionClient,
{
    pub fn new(source: S, completion: C) -> Self {
        Self {
            seasons: SeasonStatsAggregator::new(source.clone()),
            fighters: FighterStatsService::new(source.clone()),
            source,
            completion,
            prompts: ComparisonPromptBuilder::new(),
        }
    }

    /// Display name from the athlete-info document, or `"<Noun> <id>"`.
    pub async fn display_name(&self, athlete_id: AthleteId, sport: Sport) -> String {
        let info = self.athlete_info(athlete_id).await;
        name_or_placeholder(info.as_ref(), athlete_id, sport)
    }

    async fn athlete_info(&self, athlete_id: AthleteId) -> Option<Value> {
        or_absent(self.source.athlete_info(athlete_id).await, "athlete info")
    }

    pub async fn compare_players(
        &self,
        first: AthleteId,
        second: AthleteId,
        selector: TypeSelector,
    ) -> ComparisonResult {
        let span = tracing::info_span!("compare_players", first, second, ?selector);
        async move {
            let (first_name, second_name, first_stats, second_stats) = join!(
                self.display_name(first, Sport::Basketball),
                self.display_name(second, Sport::Basketball),
                self.seasons.season_stats(first, selector),
                self.seasons.season_stats(second, selector),
            );
            tracing::info!(
                first_seasons = first_stats.len(),
                second_seasons = second_stats.len(),
                "statistics loaded"
            );

            if first_stats.is_empty() || second_stats.is_empty() {
                return insufficient(Sport::Basketball, first_name, second_name);
            }

            let prompt = self.prompts.players(
                PlayerSide {
                    name: &first_name,
                    seasons: &first_stats,
                },
                PlayerSide {
                    name: &second_name,
                    seasons: &second_stats,
                },
            );
            self.analyse(Sport::Basketball, &prompt, first_name, second_name)
                .await
        }
        .instrument(span)
        .await
    }

    pub async fn compare_fighters(&self, first: AthleteId, second: AthleteId) -> ComparisonResult {
        let span = tracing::info_span!("compare_fighters", first, second);
        async move {
            let (first_info, second_info, first_stats, second_stats) = join!(
                self.athlete_info(first),
                self.athlete_info(second),
                self.fighters.career_stats(first),
                self.fighters.career_stats(second),
            );
            let first_name = name_or_placeholder(first_info.as_ref(), first, Sport::Mma);
            let second_name = name_or_placeholder(second_info.as_ref(), second, Sport::Mma);

            let (Some(first_stats), Some(second_stats)) = (first_stats, second_stats) else {
                return insufficient(Sport::Mma, first_name, second_name);
            };

            let (first_profile, second_profile) = join!(
                self.profile(first, first_info.as_ref()),
                self.profile(second, second_info.as_ref()),
            );

            let prompt = self.prompts.fighters(
                FighterSide {
                    name: &first_name,
                    stats: &first_stats,
                    profile: first_profile.as_ref(),
                },
                FighterSide {
                    name: &second_name,
                    stats: &second_stats,
                    profile: second_profile.as_ref(),
                },
            );
            self.analyse(Sport::Mma, &prompt, first_name, second_name)
                .await
        }
        .instrument(span)
        .await
    }

    async fn profile(
        &self,
        fighter_id: AthleteId,
        info: Option<&Value>,
    ) -> Option<FighterProfile> {
        match info {
            Some(info) => Some(self.fighters.profile_from_info(fighter_id, info).await),
            None => None,
        }
    }

    async fn analyse(
        &self,
        sport: Sport,
        prompt: &PromptPair,
        first_name: String,
        second_name: String,
    ) -> ComparisonResult {
        let raw = match self.completion.complete(prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::error!(error = %err, "completion failed");
                COMPLETION_FAILURE.to_string()
            }
        };

        let mut result = StructuredResponseParser::for_sport(sport).parse(&raw);
        if !result.has_structured_fields() {
            tracing::warn!("completion contained no recognised labels");
        }
        result.athlete1_name = Some(first_name);
        result.athlete2_name = Some(second_name);
        result
    }
}

fn name_or_placeholder(info: Option<&Value>, athlete_id: AthleteId, sport: Sport) -> String {
    info.and_then(|info| info.get("displayName"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| sport.placeholder_name(athlete_id))
}

fn insufficient(sport: Sport, first_name: String, second_name: String) -> ComparisonResult {
    tracing::warn!(?sport, "skipping completion: statistics missing for one side");
    ComparisonResult {
        athlete1_name: Some(first_name),
        athlete2_name: Some(second_name),
        ..ComparisonResult::message_only(sport.insufficient_data_message())
    }
}
