//! Integration tests for `RawgClient` using wiremock HTTP mocks.

use gameloot_rawg::{RawgClient, RawgError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> RawgClient {
    RawgClient::with_base_url("test-key", 5, "gameloot-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn game_json() -> serde_json::Value {
    serde_json::json!({
        "id": 3498,
        "slug": "grand-theft-auto-v",
        "name": "Grand Theft Auto V",
        "released": "2013-09-17",
        "background_image": "https://media.rawg.io/gta5.jpg",
        "rating": 4.47,
        "genres": [{ "id": 4, "name": "Action" }],
        "platforms": [{ "platform": { "id": 4, "name": "PC" } }],
        "description": "<p>Rockstar Games went bigger</p>",
        "description_raw": "Rockstar Games went bigger"
    })
}

#[tokio::test]
async fn search_returns_normalized_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "count": 1,
        "next": null,
        "results": [game_json()]
    });

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("key", "test-key"))
        .and(query_param("search", "gta v"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.search("gta v").await.expect("should parse search");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 3498);
    assert_eq!(results[0].name, "Grand Theft Auto V");
    assert_eq!(results[0].genres, vec!["Action"]);
}

#[tokio::test]
async fn search_blank_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.search("   ").await.expect("blank search is not an error");
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_missing_results_field_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "count": 0 })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.search("nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn get_by_id_returns_catalog_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/3498"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_json()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let game = client.get_by_id("3498").await.expect("should parse game");

    assert_eq!(game.slug, "grand-theft-auto-v");
    assert_eq!(game.platforms, vec!["PC"]);
    assert_eq!(
        game.description_text.as_deref(),
        Some("Rockstar Games went bigger")
    );
}

#[tokio::test]
async fn get_by_id_blank_is_invalid_argument() {
    let client = test_client("http://127.0.0.1:9");
    let err = client.get_by_id("").await.unwrap_err();
    assert!(matches!(err, RawgError::InvalidArgument(_)), "got {err:?}");
}

#[tokio::test]
async fn get_by_id_non_success_is_remote_unavailable_without_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_by_id("1").await.unwrap_err();

    match err {
        RawgError::RemoteUnavailable { url, reason } => {
            assert!(reason.contains("404"), "reason: {reason}");
            assert!(!url.contains("test-key"), "API key leaked into error: {url}");
        }
        other => panic!("expected RemoteUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn get_by_id_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_by_id("1").await.unwrap_err();
    assert!(matches!(err, RawgError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn get_game_page_joins_details_and_screenshots() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/3498"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_json()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/3498/screenshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "results": [
                { "id": 1, "image": "https://media.rawg.io/s1.jpg" },
                { "id": 2, "image": "https://media.rawg.io/s2.jpg" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.get_game_page("3498").await.expect("page should load");

    assert_eq!(page.game.id, 3498);
    assert_eq!(page.screenshots.len(), 2);
    assert_eq!(page.screenshots[1].image, "https://media.rawg.io/s2.jpg");
}

#[tokio::test]
async fn get_game_page_fails_when_screenshots_fail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/3498"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game_json()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/3498/screenshots"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_game_page("3498").await.unwrap_err();
    assert!(matches!(err, RawgError::RemoteUnavailable { .. }), "got {err:?}");
}
