//! Athlete statistics aggregation and completion-backed head-to-head comparison.
//!
//! `Comparator` runs the whole pipeline: names, statistics for both sides,
//! prompt, one completion call and labeled-response parsing. With the default
//! features, `Settings::from_env` wires it to ESPN and an OpenAI-compatible
//! endpoint.

mod comparator;
#[cfg(all(feature = "espn", feature = "openai"))]
mod settings;

pub use comparator::{Comparator, COMPLETION_FAILURE};
#[cfg(all(feature = "espn", feature = "openai"))]
pub use settings::Settings;

pub use statduel_core::{
    Accolades, AthleteId, Award, ComparisonResult, CompletionClient, FightRecord, FighterProfile,
    FighterStats, PromptPair, SearchHit, SeasonStatRecord, Sport, StatSource, StatType,
    StatduelError, TypeSelector,
};
pub use statduel_prompt::{ComparisonPromptBuilder, StructuredResponseParser};
pub use statduel_stats::{
    AccoladesService, AthleteSearch, FighterStatsService, SeasonStatsAggregator,
};

#[cfg(feature = "espn")]
pub use statduel_espn::{EspnClient, EspnClientBuilder, EspnError};
#[cfg(feature = "openai")]
pub use statduel_llm::{OpenAiCompatibleBuilder, OpenAiCompatibleClient};
