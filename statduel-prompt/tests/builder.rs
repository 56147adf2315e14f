use statduel_core::{
    FightRecord, FighterProfile, FighterStats, SeasonStatRecord, Sport, StatType,
};
use statduel_prompt::{
    labels_for, ComparisonPromptBuilder, FighterSide, PlayerSide, StructuredResponseParser,
};

fn season(year: i32, stat_type: StatType, points: f64) -> SeasonStatRecord {
    SeasonStatRecord {
        season: year,
        stat_type,
        games_played: 80,
        minutes: 36.0,
        points,
        assists: 7.0,
        rebounds: 7.0,
        field_goals_made: 10.0,
        field_goals_attempted: 20.0,
        true_shooting: Some(0.58),
        effective_field_goal: Some(0.525),
        ..SeasonStatRecord::default()
    }
}

fn seasons() -> Vec<SeasonStatRecord> {
    vec![
        season(2012, StatType::Regular, 27.0),
        season(2013, StatType::Regular, 29.0),
        season(2013, StatType::Playoff, 29.0),
    ]
}

#[test]
fn player_prompt_is_deterministic() {
    let stats = seasons();
    let builder = ComparisonPromptBuilder::new();
    let first = PlayerSide { name: "LeBron James", seasons: &stats };
    let second = PlayerSide { name: "Kevin Durant", seasons: &stats };

    assert_eq!(builder.players(first, second), builder.players(first, second));
}

#[test]
fn player_prompt_carries_summaries_and_contract() {
    let stats = seasons();
    let prompt = ComparisonPromptBuilder::new().players(
        PlayerSide { name: "LeBron James", seasons: &stats },
        PlayerSide { name: "Kevin Durant", seasons: &[] },
    );
    let user = prompt.user();

    assert!(user.starts_with("Compare these two NBA players"));
    assert!(user.contains("PLAYER 1 (LeBron James):\n  Seasons: 3 | Total Games: 240\n"));
    assert!(user.contains("Career Averages: 28.3 PPG, 7.0 APG, 7.0 RPG, 36.0 MPG"));
    assert!(user.contains("Shooting: 50.0% FG, 52.5% eFG, 58.0% TS"));
    assert!(user.contains("Peak Season (2013): 29.0 PPG"));
    assert!(user.contains("PLAYER 2 (Kevin Durant):\n  Seasons: 0 | Total Games: 0\n"));
    assert!(user.ends_with(
        "OVERALL_WINNER: [Player 1 or Player 2]\n\
ONE_VS_ONE: [Detailed prediction]\n\
PLAYER1_STRENGTHS: [List of strengths]\n\
PLAYER2_STRENGTHS: [List of strengths]\n\
CONCLUSION: [Final analysis]"
    ));
    assert!(prompt.system().contains("Assists carry no weight"));
}

#[test]
fn names_are_inserted_verbatim() {
    let prompt = ComparisonPromptBuilder::new().players(
        PlayerSide { name: "{{format}}", seasons: &[] },
        PlayerSide { name: "B", seasons: &[] },
    );
    assert!(prompt.user().contains("PLAYER 1 ({{format}}):"));
}

#[test]
fn fighter_prompt_includes_profile_when_present() {
    let stats = FighterStats {
        takedown_accuracy: 45.0,
        strikes_landed_per_minute: 4.25,
        strike_accuracy: 51.0,
        takedown_average: 2.5,
        submission_average: 0.75,
        ko_percentage: 30.0,
        tko_percentage: 20.0,
        decision_percentage: 50.0,
    };
    let profile = FighterProfile {
        name: "Jon Jones".to_string(),
        weight_class: Some("Heavyweight".to_string()),
        reach: Some("84.5\"".to_string()),
        record: Some(FightRecord {
            summary: "27-1-0".to_string(),
            wins: 27,
            losses: 1,
            draws: 0,
            win_rate: Some(27.0 * 100.0 / 28.0),
        }),
        ..FighterProfile::default()
    };
    let prompt = ComparisonPromptBuilder::new().fighters(
        FighterSide { name: "Jon Jones", stats: &stats, profile: Some(&profile) },
        FighterSide { name: "Fighter 9", stats: &stats, profile: None },
    );
    let user = prompt.user();

    assert!(user.contains("FIGHTER 1 (Jon Jones):\n  Weight Class: Heavyweight\n  Reach: 84.5\"\n"));
    assert!(user.contains("Record: 27-1-0 (96.4% wins)"));
    assert!(user.contains("FIGHTER 2 (Fighter 9):\n  Takedown Accuracy: 45.0%\n"));
    assert!(user.contains("Striking: 4.25 strikes/min, 51.0% accuracy"));
    assert!(user.contains("Finish Rates: 30.0% KO, 20.0% TKO, 50.0% Decision"));
    assert!(user.contains("FIGHTER1_STRENGTHS: [List of strengths]"));
    assert!(prompt.system().contains("Weight class"));
}

#[test]
fn contract_labels_are_understood_by_parser() {
    for sport in [Sport::Basketball, Sport::Mma] {
        let reply = labels_for(sport)
            .iter()
            .map(|entry| format!("{}: value", entry.label))
            .collect::<Vec<_>>()
            .join("\n");
        let result = StructuredResponseParser::for_sport(sport).parse(&reply);
        assert_eq!(result.overall_winner.as_deref(), Some("value"));
        assert_eq!(result.one_vs_one_prediction.as_deref(), Some("value"));
        assert_eq!(result.athlete1_strengths.as_deref(), Some("value"));
        assert_eq!(result.athlete2_strengths.as_deref(), Some("value"));
        assert_eq!(result.conclusion.as_deref(), Some("value"));
    }
}
