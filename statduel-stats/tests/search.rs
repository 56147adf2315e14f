mod common;

use common::FakeSource;
use serde_json::json;
use statduel_core::Sport;
use statduel_stats::search::{parse_athlete_id, parse_search_results};
use statduel_stats::AthleteSearch;

fn search_doc() -> serde_json::Value {
    json!({
        "results": [
            {
                "type": "player",
                "contents": [
                    {
                        "uid": "s:40~l:46~a:1966",
                        "displayName": "LeBron James",
                        "sport": "basketball",
                        "subtitle": "Los Angeles Lakers",
                        "image": { "default": "https://img/lebron.png" }
                    },
                    {
                        "uid": "s:3301~a:3022677",
                        "displayName": "Jon Jones",
                        "sport": "mma",
                        "subtitle": "Heavyweight"
                    },
                    { "uid": "s:40~l:46", "displayName": "No Id", "sport": "basketball" }
                ]
            },
            {
                "type": "team",
                "contents": [{ "uid": "s:40~l:46~a:1", "sport": "basketball" }]
            }
        ]
    })
}

#[test]
fn parses_athlete_id_from_uid() {
    assert_eq!(parse_athlete_id("s:40~l:46~a:1966"), Some(1966));
    assert_eq!(parse_athlete_id("s:40~l:46"), None);
    assert_eq!(parse_athlete_id("a:0"), None);
}

#[test]
fn keeps_only_players_of_the_requested_sport() {
    let hits = parse_search_results(&search_doc(), Sport::Basketball);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1966);
    assert_eq!(hits[0].sport, "nba");
    assert_eq!(hits[0].subtitle, "Los Angeles Lakers");
    assert_eq!(hits[0].headshot_url.as_deref(), Some("https://img/lebron.png"));

    let hits = parse_search_results(&search_doc(), Sport::Mma);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jon Jones");
    assert!(hits[0].headshot_url.is_none());
}

#[tokio::test]
async fn blank_query_skips_the_source() {
    let search = AthleteSearch::new(FakeSource::default(), Sport::Basketball);
    assert!(search.search("   ").await.is_empty());
}

#[tokio::test]
async fn enriches_hits_best_effort() {
    let mut source = FakeSource::default();
    source.searches.insert("lebron".to_string(), search_doc());
    source.infos.insert(
        1966,
        json!({
            "position": { "abbreviation": "SF" },
            "displayHeight": "6' 9\"",
            "displayWeight": "250 lbs"
        }),
    );

    let search = AthleteSearch::new(source, Sport::Basketball);
    let hits = search.search("  lebron ").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position.as_deref(), Some("SF"));
    assert_eq!(hits[0].display_weight.as_deref(), Some("250 lbs"));
}

#[tokio::test]
async fn mma_search_uses_larger_limit_and_nickname() {
    let mut source = FakeSource::default();
    source.searches.insert("jones".to_string(), search_doc());
    source
        .infos
        .insert(3022677, json!({ "nickname": "Bones" }));

    let search = AthleteSearch::new(std::sync::Arc::new(source), Sport::Mma);
    let hits = search.search("jones").await;
    assert_eq!(hits[0].nickname.as_deref(), Some("Bones"));
}

#[tokio::test]
async fn failed_enrichment_keeps_hit() {
    let mut source = FakeSource::default();
    source.searches.insert("lebron".to_string(), search_doc());
    let hits = AthleteSearch::new(source, Sport::Basketball)
        .search("lebron")
        .await;
    assert_eq!(hits.len(), 1);
    assert!(hits[0].position.is_none());
}
