//! Integration tests for the proxy route handlers
//!
//! The upstream API is a wiremock server; the handlers run inside an actix
//! test service. Covered: parameter validation (no upstream call on 400),
//! verbatim body relaying, status mirroring and transport failures.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::{App, test, web};
use rift_teletext::config::Config;
use rift_teletext::server::ProxyState;
use rift_teletext::server::routes;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_API_KEY: &str = "RGAPI-test-key";

fn proxy_state(upstream: &str) -> web::Data<ProxyState> {
    web::Data::new(ProxyState {
        client: reqwest::Client::new(),
        config: Config {
            api_key: TEST_API_KEY.to_string(),
            platform_domain: upstream.to_string(),
            regional_domain: upstream.to_string(),
            http_timeout_seconds: 5,
            ..Config::default()
        },
    })
}

async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

#[actix_web::test]
async fn missing_parameters_return_400_without_upstream_call() {
    let mock_server = MockServer::start().await;

    // Any upstream traffic at all fails the test
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let cases = [
        "/api/getPuuid",
        "/api/getPuuid?userNickname=Faker",
        "/api/getPuuid?tagLine=KR1",
        "/api/getSummonerInfo",
        "/api/getSummoner",
        "/api/getLeagueInfo",
        "/api/getRecentMatches",
        "/api/getMatchDetails",
        "/api/getChampionMastery",
    ];

    for uri in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "{uri} should return 400");
        let body = read_json(resp).await;
        assert!(
            body["message"].as_str().unwrap_or("").contains("Missing"),
            "{uri} should explain the missing parameter, got {body}"
        );
    }
}

#[actix_web::test]
async fn get_puuid_relays_upstream_body_verbatim() {
    let mock_server = MockServer::start().await;

    let upstream_body = json!({
        "puuid": "puuid-faker",
        "gameName": "Faker",
        "tagLine": "KR1"
    });

    Mock::given(method("GET"))
        .and(path("/riot/account/v1/accounts/by-riot-id/Faker/KR1"))
        .and(header("X-Riot-Token", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&upstream_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getPuuid?userNickname=Faker&tagLine=KR1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(resp).await, upstream_body);
}

#[actix_web::test]
async fn get_summoner_info_routes_by_puuid() {
    let mock_server = MockServer::start().await;

    let upstream_body = json!({
        "id": "summ-faker",
        "puuid": "puuid-faker",
        "summonerLevel": 742,
        "profileIconId": 6
    });

    Mock::given(method("GET"))
        .and(path("/lol/summoner/v4/summoners/by-puuid/puuid-faker"))
        .and(header("X-Riot-Token", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(&upstream_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getSummonerInfo?puuid=puuid-faker")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(resp).await, upstream_body);
}

#[actix_web::test]
async fn get_summoner_routes_by_summoner_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/summoner/v4/summoners/summ-faker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "summ-faker"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getSummoner?summonerId=summ-faker")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn get_recent_matches_pins_the_match_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/by-puuid/puuid-faker/ids"))
        .and(query_param("start", "0"))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["KR_1", "KR_2", "KR_3"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getRecentMatches?puuid=puuid-faker")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(read_json(resp).await, json!(["KR_1", "KR_2", "KR_3"]));
}

#[actix_web::test]
async fn upstream_error_status_is_mirrored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/KR_missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getMatchDetails?matchId=KR_missing")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(
        read_json(resp).await["message"],
        "Error fetching match details"
    );
}

#[actix_web::test]
async fn upstream_rate_limit_is_mirrored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lol/league/v4/entries/by-summoner/summ-faker"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getLeagueInfo?summonerId=summ-faker")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 429);
    assert_eq!(read_json(resp).await["message"], "Error fetching league info");
}

#[actix_web::test]
async fn upstream_server_error_is_mirrored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/lol/champion-mastery/v4/champion-masteries/by-puuid/puuid-faker",
        ))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let app = test::init_service(
        App::new()
            .app_data(proxy_state(&mock_server.uri()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getChampionMastery?puuid=puuid-faker")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 503);
    assert_eq!(
        read_json(resp).await["message"],
        "Error fetching champion mastery"
    );
}

#[actix_web::test]
async fn transport_failure_returns_500() {
    // Port 9 (discard) is almost certainly closed; no upstream response exists
    let app = test::init_service(
        App::new()
            .app_data(proxy_state("http://127.0.0.1:9"))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/getSummonerInfo?puuid=puuid-faker")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    assert_eq!(
        read_json(resp).await["message"],
        "Error fetching summoner info"
    );
}
