//! Turns raw statistics-provider documents into canonical records.
//!
//! Nothing in this crate returns an error to its caller: a failed or
//! malformed upstream fetch degrades to an omitted record, an empty list or
//! `None`, at the smallest granularity the fetch covers.

pub mod accolades;
pub mod aggregator;
pub mod fetch;
pub mod fighter;
pub mod lookup;
pub mod metrics;
pub mod resolver;
pub mod search;

pub use accolades::AccoladesService;
pub use aggregator::SeasonStatsAggregator;
pub use fighter::FighterStatsService;
pub use resolver::{SeasonLocator, SeasonRef};
pub use search::AthleteSearch;
