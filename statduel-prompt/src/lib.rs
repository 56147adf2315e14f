mod builder;
mod labels;
mod parser;
mod summary;
mod template;

pub use builder::{ComparisonPromptBuilder, FighterSide, PlayerSide};
pub use labels::{labels_for, LabelEntry, ResultField, BASKETBALL_LABELS, MMA_LABELS};
pub use parser::StructuredResponseParser;
pub use summary::{best_season, CareerSummary};
pub use template::PromptTemplate;
