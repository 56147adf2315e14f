use std::fmt::Write as _;

use statduel_core::{FighterProfile, FighterStats, SeasonStatRecord, StatType};

/// Career aggregate over a list of season records.
///
/// Averages are simple means across seasons, not weighted by games played.
/// `field_goal_pct` is a percentage; `true_shooting` and
/// `effective_field_goal` stay ratios like the per-season fields they average.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CareerSummary {
    pub seasons: usize,
    pub total_games: u32,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub minutes: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub field_goal_pct: f64,
    pub true_shooting: f64,
    pub effective_field_goal: f64,
}

impl CareerSummary {
    pub fn from_seasons(seasons: &[SeasonStatRecord]) -> Self {
        Self {
            seasons: seasons.len(),
            total_games: seasons.iter().map(|s| s.games_played).sum(),
            points: mean(seasons.iter().map(|s| s.points)),
            assists: mean(seasons.iter().map(|s| s.assists)),
            rebounds: mean(seasons.iter().map(|s| s.rebounds)),
            minutes: mean(seasons.iter().map(|s| s.minutes)),
            steals: mean(seasons.iter().map(|s| s.steals)),
            blocks: mean(seasons.iter().map(|s| s.blocks)),
            turnovers: mean(seasons.iter().map(|s| s.turnovers)),
            field_goal_pct: mean(seasons.iter().filter_map(SeasonStatRecord::field_goal_pct)),
            true_shooting: mean(seasons.iter().filter_map(|s| s.true_shooting)),
            effective_field_goal: mean(seasons.iter().filter_map(|s| s.effective_field_goal)),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Season with the highest points per game. On ties the earliest record wins.
pub fn best_season(seasons: &[SeasonStatRecord]) -> Option<&SeasonStatRecord> {
    seasons.iter().fold(None, |best, season| match best {
        Some(current) if season.points <= current.points => Some(current),
        _ => Some(season),
    })
}

pub(crate) fn player_block(seasons: &[SeasonStatRecord]) -> String {
    let career = CareerSummary::from_seasons(seasons);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  Seasons: {} | Total Games: {}",
        career.seasons, career.total_games
    );
    let _ = writeln!(
        out,
        "  Career Averages: {:.1} PPG, {:.1} APG, {:.1} RPG, {:.1} MPG",
        career.points, career.assists, career.rebounds, career.minutes
    );
    let _ = writeln!(
        out,
        "  Defense & Ball Security: {:.1} SPG, {:.1} BPG, {:.1} TOV",
        career.steals, career.blocks, career.turnovers
    );
    let _ = writeln!(
        out,
        "  Shooting: {:.1}% FG, {:.1}% eFG, {:.1}% TS",
        career.field_goal_pct,
        career.effective_field_goal * 100.0,
        career.true_shooting * 100.0
    );
    if let Some(peak) = best_season(seasons) {
        let kind = match peak.stat_type {
            StatType::Regular => "",
            StatType::Playoff => " Playoffs",
        };
        let _ = writeln!(
            out,
            "  Peak Season ({}{}): {:.1} PPG, {:.1} APG, {:.1} RPG",
            peak.season, kind, peak.points, peak.assists, peak.rebounds
        );
    }
    out
}

pub(crate) fn fighter_block(stats: &FighterStats, profile: Option<&FighterProfile>) -> String {
    let mut out = String::new();
    if let Some(profile) = profile {
        let attributes = [
            ("Weight Class", profile.weight_class.as_deref()),
            ("Height", profile.height.as_deref()),
            ("Weight", profile.weight.as_deref()),
            ("Reach", profile.reach.as_deref()),
            ("Stance", profile.stance.as_deref()),
        ];
        for (label, value) in attributes {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                let _ = writeln!(out, "  {label}: {value}");
            }
        }
        if let Some(record) = &profile.record {
            match record.win_rate {
                Some(rate) => {
                    let _ = writeln!(out, "  Record: {} ({rate:.1}% wins)", record.summary);
                }
                None => {
                    let _ = writeln!(out, "  Record: {}", record.summary);
                }
            }
        }
    }
    let _ = writeln!(out, "  Takedown Accuracy: {:.1}%", stats.takedown_accuracy);
    let _ = writeln!(
        out,
        "  Striking: {:.2} strikes/min, {:.1}% accuracy",
        stats.strikes_landed_per_minute, stats.strike_accuracy
    );
    let _ = writeln!(out, "  Takedown Average: {:.2} per 15min", stats.takedown_average);
    let _ = writeln!(out, "  Submission Average: {:.2} per 15min", stats.submission_average);
    let _ = writeln!(
        out,
        "  Finish Rates: {:.1}% KO, {:.1}% TKO, {:.1}% Decision",
        stats.ko_percentage, stats.tko_percentage, stats.decision_percentage
    );
    out
}
