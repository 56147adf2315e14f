//! ESPN statistics source for statduel.
//!
//! `EspnClient` implements `StatSource` over the ESPN core, web and search
//! APIs. It is pure transport: every call returns the raw JSON document or an
//! error, and mapping documents into statistic records happens in
//! `statduel-stats`.
//!
//! Environment variables conventionally passed to the builder's `*_from_env`
//! setters:
//! - `STATDUEL_NBA_API_BASE` / `STATDUEL_MMA_API_BASE`
//! - `STATDUEL_NBA_WEB_BASE` (bio and awards)
//! - `STATDUEL_MMA_LEAGUE_BASE` (fight records)
//! - `STATDUEL_SEARCH_BASE`
//! - `STATDUEL_HTTP_TIMEOUT_MS` (optional, default 5000)

pub mod client;
mod config;
mod error;

pub use client::EspnClient;
pub use config::{EspnClientBuilder, DEFAULT_TIMEOUT};
pub use error::EspnError;
