mod common;

use common::{prefixed_averages, season_ref, stats_ref, suffixed_averages, total_block, FakeSource};
use serde_json::json;
use statduel_core::{StatType, TypeSelector};
use statduel_stats::aggregator::map_averages;
use statduel_stats::SeasonStatsAggregator;

fn source_with_two_seasons() -> FakeSource {
    let mut source = FakeSource::default();
    source.logs.insert(
        1966,
        json!({
            "entries": [
                {
                    "season": season_ref(2013),
                    "statistics": [total_block(1966, 2013, 3), total_block(1966, 2013, 2)]
                },
                {
                    "season": season_ref(2012),
                    "statistics": [total_block(1966, 2012, 2)]
                }
            ]
        }),
    );
    source
        .refs
        .insert(stats_ref(1966, 2012, 2), suffixed_averages(27.1, 37.5));
    source
        .refs
        .insert(stats_ref(1966, 2013, 2), suffixed_averages(26.8, 37.9));
    source
        .refs
        .insert(stats_ref(1966, 2013, 3), prefixed_averages(25.9));
    source
}

#[tokio::test]
async fn aggregates_records_ordered_by_season_then_type() {
    let aggregator = SeasonStatsAggregator::new(source_with_two_seasons());
    let records = aggregator.season_stats(1966, TypeSelector::All).await;

    let keys: Vec<(i32, StatType)> = records.iter().map(|r| (r.season, r.stat_type)).collect();
    assert_eq!(
        keys,
        vec![
            (2012, StatType::Regular),
            (2013, StatType::Regular),
            (2013, StatType::Playoff)
        ]
    );
    assert_eq!(records[0].points, 27.1);
    assert_eq!(records[0].games_played, 71);
    assert_eq!(records[2].points, 25.9);
    assert_eq!(records[2].minutes, 36.0);
}

#[tokio::test]
async fn type_filter_limits_fetches() {
    let source = source_with_two_seasons();
    let aggregator = SeasonStatsAggregator::new(source);
    let records = aggregator
        .season_stats(1966, TypeSelector::Only(StatType::Playoff))
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].stat_type, StatType::Playoff);
    let fetches = aggregator
        .source()
        .calls()
        .into_iter()
        .filter(|call| call.starts_with("ref:"))
        .count();
    assert_eq!(fetches, 1);
}

#[tokio::test]
async fn failed_season_fetch_is_skipped() {
    let mut source = source_with_two_seasons();
    source.refs.remove(&stats_ref(1966, 2013, 2));
    let records = SeasonStatsAggregator::new(source)
        .season_stats(1966, TypeSelector::All)
        .await;
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|r| !(r.season == 2013 && r.stat_type == StatType::Regular)));
}

#[tokio::test]
async fn document_without_statistics_is_skipped() {
    let mut source = source_with_two_seasons();
    source
        .refs
        .insert(stats_ref(1966, 2012, 2), json!({ "athlete": { "id": "1966" } }));
    let records = SeasonStatsAggregator::new(source)
        .season_stats(1966, TypeSelector::All)
        .await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].season, 2013);
}

#[tokio::test]
async fn missing_log_yields_empty_list() {
    let records = SeasonStatsAggregator::new(FakeSource::default())
        .season_stats(99, TypeSelector::All)
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn bare_seasons_fetch_by_identifiers() {
    let mut source = FakeSource::default();
    source.logs.insert(7, json!({ "entries": [{ "season": 2020 }] }));
    source
        .averages
        .insert((7, 2020, StatType::Regular), suffixed_averages(20.0, 30.0));

    let aggregator = SeasonStatsAggregator::new(source);
    let records = aggregator.season_stats(7, TypeSelector::All).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].per75_points, Some(50.0));
    let calls = aggregator.source().calls();
    assert!(calls.contains(&"avg:7:2020:2".to_string()));
    assert!(calls.contains(&"avg:7:2020:3".to_string()));
}

#[test]
fn mapping_computes_derived_metrics() {
    let record = map_averages(&suffixed_averages(25.0, 30.0), 2015, StatType::Regular).unwrap();

    let expected_ts = 25.0 / (2.0 * (19.0 + 0.44 * 7.0));
    assert!((record.true_shooting.unwrap() - expected_ts).abs() < 1e-12);
    assert!((record.effective_field_goal.unwrap() - 10.0 / 19.0).abs() < 1e-12);
    assert!((record.per75_assists.unwrap() - 6.9 / 30.0 * 75.0).abs() < 1e-12);
    assert_eq!(record.steals, 0.0);
    assert_eq!(record.three_pointers_attempted, 0.0);
}

#[test]
fn mapping_leaves_derived_metrics_absent_without_denominators() {
    let doc = json!({ "categories": [{ "stats": [{ "name": "avgPoints", "value": 4.0 }] }] });
    let record = map_averages(&doc, 2015, StatType::Playoff).unwrap();
    assert_eq!(record.true_shooting, None);
    assert_eq!(record.effective_field_goal, None);
    assert_eq!(record.per75_points, None);
    assert_eq!(record.per75_rebounds, None);
}
