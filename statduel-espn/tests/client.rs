use serde_json::json;
use statduel_core::{StatSource, StatType, StatduelError};
use statduel_espn::EspnClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EspnClient {
    EspnClient::builder()
        .core_base(format!("{}/v2/sports/basketball/leagues/nba", server.uri()))
        .web_base(format!("{}/web", server.uri()))
        .search_base(format!("{}/search", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn season_log_hits_statisticslog_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/sports/basketball/leagues/nba/athletes/1966/statisticslog"))
        .and(query_param("region", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entries": []})))
        .expect(1)
        .mount(&server)
        .await;

    let log = client_for(&server).season_log(1966).await.unwrap();
    assert_eq!(log, json!({"entries": []}));
}

#[tokio::test]
async fn season_averages_embeds_season_and_type_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/v2/sports/basketball/leagues/nba/seasons/2020/types/3/athletes/1966/statistics/0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"categories": []})))
        .expect(1)
        .mount(&server)
        .await;

    let doc = client_for(&server)
        .season_averages(1966, 2020, StatType::Playoff)
        .await
        .unwrap();
    assert_eq!(doc, json!({"categories": []}));
}

#[tokio::test]
async fn error_status_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).athlete_info(42).await.unwrap_err();
    assert!(matches!(err, StatduelError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn non_json_body_maps_to_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).athlete_info(42).await.unwrap_err();
    assert!(matches!(err, StatduelError::Malformed(_)));
}

#[tokio::test]
async fn search_sends_limit_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("limit", "20"))
        .and(query_param("query", "lebron james"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let doc = client_for(&server).search("lebron james", 20).await.unwrap();
    assert_eq!(doc, json!({"results": []}));
}

#[tokio::test]
async fn records_without_league_base_is_config_error() {
    let server = MockServer::start().await;
    let err = client_for(&server).records(7).await.unwrap_err();
    assert!(matches!(err, StatduelError::InvalidConfig(_)));
}

#[tokio::test]
async fn resolve_ref_follows_absolute_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/refs/seasons/2019/types/2/athletes/1966/statistics/0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let locator = format!(
        "{}/refs/seasons/2019/types/2/athletes/1966/statistics/0",
        server.uri()
    );
    let doc = client_for(&server).resolve_ref(&locator).await.unwrap();
    assert_eq!(doc["ok"], true);
}
