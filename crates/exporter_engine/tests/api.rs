use exporter_core::{DocEntry, Repo};
use exporter_engine::{ApiError, DocSource, FetchSettings, YuqueClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> YuqueClient {
    YuqueClient::new(&server.uri(), "tok", &FetchSettings::default()).expect("client")
}

#[tokio::test]
async fn list_repos_resolves_the_user_then_maps_ids_to_strings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("X-Auth-Token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 42, "login": "someone" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/42/repos"))
        .and(header("X-Auth-Token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 7, "name": "notes", "slug": "notes" },
                { "id": 9, "name": "deploy", "slug": "deploy" }
            ]
        })))
        .mount(&server)
        .await;

    let repos = client(&server).list_repos().await.expect("repos");
    assert_eq!(
        repos,
        vec![
            Repo {
                id: "7".into(),
                name: "notes".into()
            },
            Repo {
                id: "9".into(),
                name: "deploy".into()
            },
        ]
    );
}

#[tokio::test]
async fn list_docs_returns_entries_in_listing_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/7/docs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 100, "title": "First" },
                { "id": 101, "title": "Second" }
            ]
        })))
        .mount(&server)
        .await;

    let docs = client(&server).list_docs("7").await.expect("docs");
    assert_eq!(
        docs,
        vec![
            DocEntry {
                id: "100".into(),
                title: "First".into()
            },
            DocEntry {
                id: "101".into(),
                title: "Second".into()
            },
        ]
    );
}

#[tokio::test]
async fn fetch_body_unwraps_the_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/7/docs/100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 100, "title": "First", "body": "# Hello" }
        })))
        .mount(&server)
        .await;

    let body = client(&server).fetch_body("7", "100").await.expect("body");
    assert_eq!(body, "# Hello");
}

#[tokio::test]
async fn missing_body_becomes_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/7/docs/200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 200, "title": "Board", "body": null }
        })))
        .mount(&server)
        .await;

    let body = client(&server).fetch_body("7", "200").await.expect("body");
    assert_eq!(body, "");
}

#[tokio::test]
async fn http_failure_surfaces_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server).list_repos().await.unwrap_err();
    assert!(matches!(err, ApiError::HttpStatus(401)));
}
