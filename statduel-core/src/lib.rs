mod comparison;
mod completion;
mod error;
mod source;
mod sport;
mod stats;

pub use comparison::{ComparisonResult, PromptPair};
pub use completion::CompletionClient;
pub use error::StatduelError;
pub use source::{AthleteId, StatSource};
pub use sport::Sport;
pub use stats::{
    Accolades, Award, FightRecord, FighterProfile, FighterStats, SearchHit, SeasonStatRecord,
    StatType, TypeSelector,
};

pub type Value = serde_json::Value;
