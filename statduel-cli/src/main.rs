//! `statduel` command line: season statistics, accolades, search and
//! completion-backed comparisons, printed as JSON.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use statduel::{
    AccoladesService, AthleteSearch, Comparator, FighterStatsService, SeasonStatsAggregator,
    Settings, Sport, TypeSelector,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "statduel")]
#[command(
    about = "Aggregate athlete statistics and compare athletes head to head",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Completion model, overriding the configured default
    #[arg(long, global = true, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// Timeout in milliseconds for statistics requests
    #[arg(long, global = true, env = "STATDUEL_HTTP_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-season averages for an NBA player
    Stats {
        athlete_id: u64,
        /// 0 = regular season and playoffs, 2 = regular season, 3 = playoffs
        #[arg(long, default_value_t = 0)]
        stat_type: i32,
    },
    /// Compare two NBA players
    Compare {
        first: u64,
        second: u64,
        /// 0 = regular season and playoffs, 2 = regular season, 3 = playoffs
        #[arg(long, default_value_t = 0)]
        stat_type: i32,
    },
    /// Compare two MMA fighters
    Fight { first: u64, second: u64 },
    /// Career statistics and profile for an MMA fighter
    Fighter { athlete_id: u64 },
    /// Search athletes by name
    Search {
        query: String,
        #[arg(long, value_enum, default_value_t = SportArg::Nba)]
        sport: SportArg,
    },
    /// Awards for an NBA player, most prestigious first
    Accolades { athlete_id: u64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum SportArg {
    Nba,
    Mma,
}

impl From<SportArg> for Sport {
    fn from(value: SportArg) -> Self {
        match value {
            SportArg::Nba => Sport::Basketball,
            SportArg::Mma => Sport::Mma,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FighterReport {
    fighter_id: u64,
    profile: Option<statduel::FighterProfile>,
    stats: Option<statduel::FighterStats>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::from_env().context("reading configuration")?;
    if let Some(model) = cli.model {
        settings = settings.with_model(model);
    }
    if let Some(millis) = cli.timeout_ms {
        settings = settings.with_http_timeout(Duration::from_millis(millis));
    }

    match cli.command {
        Commands::Stats {
            athlete_id,
            stat_type,
        } => {
            let selector = TypeSelector::from_code(stat_type)?;
            let aggregator = SeasonStatsAggregator::new(settings.nba_client()?);
            print_json(&aggregator.season_stats(athlete_id, selector).await)?;
        }
        Commands::Compare {
            first,
            second,
            stat_type,
        } => {
            let selector = TypeSelector::from_code(stat_type)?;
            let comparator =
                Comparator::new(settings.nba_client()?, settings.completion_client()?);
            print_json(&comparator.compare_players(first, second, selector).await)?;
        }
        Commands::Fight { first, second } => {
            let comparator =
                Comparator::new(settings.mma_client()?, settings.completion_client()?);
            print_json(&comparator.compare_fighters(first, second).await)?;
        }
        Commands::Fighter { athlete_id } => {
            let service = FighterStatsService::new(settings.mma_client()?);
            let (profile, stats) =
                tokio::join!(service.profile(athlete_id), service.career_stats(athlete_id));
            print_json(&FighterReport {
                fighter_id: athlete_id,
                profile,
                stats,
            })?;
        }
        Commands::Search { query, sport } => {
            let sport = Sport::from(sport);
            let client = match sport {
                Sport::Basketball => settings.nba_client()?,
                Sport::Mma => settings.mma_client()?,
            };
            print_json(&AthleteSearch::new(client, sport).search(&query).await)?;
        }
        Commands::Accolades { athlete_id } => {
            let service = AccoladesService::new(settings.nba_client()?);
            print_json(&service.accolades(athlete_id).await)?;
        }
    }

    Ok(())
}
