//! Integration tests for the facade
//!
//! These drive the full request path (URL construction, signing,
//! dispatch, response parsing) against a local one-shot fixture server
//! serving canned API responses.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use meridian_client::domain::{Bbox, ElementId, ElementType, Node, NoteStatus, Tags};
use meridian_client::{ApiError, Config, Credentials, Osm};

fn credentials() -> Credentials {
    Credentials::new("ck", "cs", "tk", "ts")
}

fn osm_at(endpoint: &str) -> Osm {
    Osm::new(Config::new(endpoint).expect("fixture endpoint parses")).expect("client builds")
}

fn osm_at_signed(endpoint: &str) -> Osm {
    let config = Config::new(endpoint)
        .expect("fixture endpoint parses")
        .with_credentials(credentials());
    Osm::new(config).expect("client builds")
}

const NODE_ENVELOPE: &str = r#"{
    "version": "0.6",
    "elements": [{
        "type": "node",
        "id": 630332341,
        "lat": 52.5170365,
        "lon": 13.3888599,
        "version": 4,
        "tags": {"amenity": "cafe", "name": "Kaffeemitte"}
    }]
}"#;

#[tokio::test]
async fn fetch_element_returns_matching_id_and_type() {
    let (endpoint, request) =
        common::serve_once("200 OK", "application/json", NODE_ENVELOPE).await;
    let osm = osm_at(&endpoint);

    let element = osm
        .fetch_element(ElementId::node(630_332_341))
        .await
        .expect("fixture node parses");

    assert_eq!(element.element_type(), ElementType::Node);
    assert_eq!(element.id(), 630_332_341);
    assert_eq!(element.tags().get("amenity").unwrap(), "cafe");

    let captured = request.await.expect("request captured");
    assert_eq!(captured.method, "GET");
    assert_eq!(captured.target, "/api/0.6/node/630332341.json");
    assert!(captured.header("Authorization").is_none());
}

#[tokio::test]
async fn unknown_element_surfaces_not_found() {
    let (endpoint, _request) = common::serve_once(
        "404 Not Found",
        "text/plain",
        "node not found",
    )
    .await;
    let osm = osm_at(&endpoint);

    let result = osm.fetch_element(ElementId::node(1)).await;
    let Err(ApiError::UnexpectedHttpStatus { status, body }) = result else {
        panic!("expected an HTTP status error");
    };
    assert_eq!(status, 404);
    assert_eq!(body, "node not found");
}

#[tokio::test]
async fn create_node_element_end_to_end() {
    // No network involved: element creation is local, the configured
    // endpoint only matters once the node is sent.
    let config = Config::new("https://api.example.org/api/0.6").expect("endpoint parses");
    assert_eq!(config.endpoint(), "https://api.example.org/api/0.6");

    let mut tags = Tags::new();
    tags.insert("name".to_string(), "Cafe".to_string());
    let node = Node::create(48.8, 2.3, tags);

    assert!((node.lat - 48.8).abs() < f64::EPSILON);
    assert!((node.lon - 2.3).abs() < f64::EPSILON);
    assert_eq!(node.tags.len(), 1);
    assert_eq!(node.tags.get("name").unwrap(), "Cafe");
}

const CLOSED_CHANGESET: &str = r#"{
    "version": "0.6",
    "changeset": {
        "id": 210528,
        "created_at": "2024-03-01T10:15:30Z",
        "closed_at": "2024-03-01T11:15:30Z",
        "open": false,
        "tags": {"comment": "old work"}
    }
}"#;

#[tokio::test]
async fn closed_changeset_reports_not_open() {
    let (endpoint, request) =
        common::serve_once("200 OK", "application/json", CLOSED_CHANGESET).await;
    let osm = osm_at(&endpoint);

    let open = osm
        .is_changeset_still_open(210_528)
        .await
        .expect("fixture changeset parses");
    assert!(!open);

    let captured = request.await.expect("request captured");
    assert_eq!(captured.target, "/api/0.6/changeset/210528.json");
}

#[tokio::test]
async fn tag_update_on_closed_changeset_fails_before_writing() {
    // The fixture serves exactly one request: the open-state check.
    // Failing locally afterwards proves no PUT was attempted.
    let (endpoint, request) =
        common::serve_once("200 OK", "application/json", CLOSED_CHANGESET).await;
    let osm = osm_at_signed(&endpoint);

    let mut tags = Tags::new();
    tags.insert("comment".to_string(), "new comment".to_string());
    let result = osm.update_changeset_tags(210_528, tags).await;

    assert!(matches!(
        result,
        Err(ApiError::ChangesetAlreadyClosed(210_528))
    ));
    let captured = request.await.expect("request captured");
    assert_eq!(captured.method, "GET");
}

#[tokio::test]
async fn create_changeset_signs_and_parses_id() {
    let (endpoint, request) = common::serve_once("200 OK", "text/plain", "188664").await;
    let osm = osm_at_signed(&endpoint);

    let id = osm
        .create_changeset("meridian test", "add a cafe")
        .await
        .expect("changeset id parses");
    assert_eq!(id, 188_664);

    let captured = request.await.expect("request captured");
    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.target, "/api/0.6/changeset/create");
    let authorization = captured.header("Authorization").expect("signed request");
    assert!(authorization.starts_with("OAuth oauth_consumer_key=\"ck\""));
    assert!(captured.body().contains("<tag k=\"created_by\" v=\"meridian test\"/>"));
    assert!(captured.body().contains("<tag k=\"comment\" v=\"add a cafe\"/>"));
}

#[tokio::test]
async fn create_changeset_without_credentials_is_refused_locally() {
    // Endpoint never contacted: the error fires before any I/O.
    let osm = osm_at("https://api.example.org/api/0.6");
    let result = osm.create_changeset("meridian test", "no auth").await;
    assert!(matches!(result, Err(ApiError::MissingCredentials(_))));
}

#[tokio::test]
async fn send_new_element_hits_create_endpoint() {
    let (endpoint, request) = common::serve_once("200 OK", "text/plain", "42").await;
    let osm = osm_at_signed(&endpoint);

    let mut tags = Tags::new();
    tags.insert("name".to_string(), "Cafe".to_string());
    let node = Node::create(48.8, 2.3, tags);

    let assigned = osm
        .send_element(&node.into(), 188_664)
        .await
        .expect("assigned id parses");
    assert_eq!(assigned, 42);

    let captured = request.await.expect("request captured");
    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.target, "/api/0.6/node/create");
    assert_eq!(captured.header("Content-Type").unwrap(), "text/xml; charset=utf-8");
    assert!(captured.body().contains("changeset=\"188664\""));
    assert!(captured.body().contains("lat=\"48.8\""));
    assert!(captured.body().contains("<tag k=\"name\" v=\"Cafe\"/>"));
}

const NOTE_FEATURE: &str = r#"{
    "type": "Feature",
    "geometry": {"type": "Point", "coordinates": [2.3, 48.8]},
    "properties": {
        "id": 2100,
        "status": "open",
        "date_created": "2024-03-01 10:15:30 UTC",
        "comments": [{
            "date": "2024-03-01 10:15:30 UTC",
            "action": "opened",
            "text": "Missing bench"
        }]
    }
}"#;

#[tokio::test]
async fn create_note_works_anonymously() {
    let (endpoint, request) = common::serve_once("200 OK", "application/json", NOTE_FEATURE).await;
    let osm = osm_at(&endpoint);

    let note = osm
        .create_note(48.8, 2.3, "Missing bench")
        .await
        .expect("fixture note parses");
    assert_eq!(note.id, 2100);
    assert_eq!(note.status, NoteStatus::Open);
    assert_eq!(note.comments.len(), 1);

    let captured = request.await.expect("request captured");
    assert_eq!(captured.method, "POST");
    assert!(captured.target.starts_with("/api/0.6/notes.json?"));
    assert!(captured.target.contains("lat=48.8"));
    assert!(captured.target.contains("lon=2.3"));
    assert!(captured.header("Authorization").is_none());
}

const NOTES_COLLECTION: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [2.3, 48.8]},
        "properties": {
            "id": 2100,
            "status": "open",
            "date_created": "2024-03-01 10:15:30 UTC",
            "comments": []
        }
    }]
}"#;

#[tokio::test]
async fn fetch_notes_sends_bbox_and_limit() {
    let (endpoint, request) =
        common::serve_once("200 OK", "application/json", NOTES_COLLECTION).await;
    let osm = osm_at(&endpoint);

    let bbox = Bbox::new(2.2, 48.7, 2.4, 48.9).expect("bbox is valid");
    let notes = osm
        .fetch_notes(bbox, Some(50), None)
        .await
        .expect("fixture notes parse");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, 2100);

    let captured = request.await.expect("request captured");
    assert!(captured.target.starts_with("/api/0.6/notes.json?"));
    assert!(captured.target.contains("bbox=2.2%2C48.7%2C2.4%2C48.9"));
    assert!(captured.target.contains("limit=50"));
}

#[tokio::test]
async fn preferences_roundtrip_envelope() {
    let (endpoint, request) = common::serve_once(
        "200 OK",
        "application/json",
        r#"{"preferences": {"gps.trace.visibility": "public", "color": "red"}}"#,
    )
    .await;
    let osm = osm_at_signed(&endpoint);

    let preferences = osm.preferences().await.expect("fixture preferences parse");
    assert_eq!(preferences.len(), 2);
    assert_eq!(preferences.get("color").unwrap(), "red");

    let captured = request.await.expect("request captured");
    assert_eq!(captured.target, "/api/0.6/user/preferences.json");
    assert!(captured.header("Authorization").is_some());
}

#[tokio::test]
async fn set_preference_puts_raw_value() {
    let (endpoint, request) = common::serve_once("200 OK", "text/plain", "").await;
    let osm = osm_at_signed(&endpoint);

    osm.set_preference("gps.trace.visibility", "public")
        .await
        .expect("preference accepted");

    let captured = request.await.expect("request captured");
    assert_eq!(captured.method, "PUT");
    assert_eq!(captured.target, "/api/0.6/user/preferences/gps.trace.visibility");
    assert_eq!(captured.body(), "public");
}

#[tokio::test]
async fn fetch_map_by_bbox_parses_elements() {
    let (endpoint, request) = common::serve_once(
        "200 OK",
        "application/json",
        r#"{
            "version": "0.6",
            "elements": [
                {"type": "node", "id": 1, "lat": 48.8, "lon": 2.3},
                {"type": "way", "id": 2, "nodes": [1]}
            ]
        }"#,
    )
    .await;
    let osm = osm_at(&endpoint);

    let bbox = Bbox::new(2.2, 48.7, 2.4, 48.9).expect("bbox is valid");
    let elements = osm.fetch_map_by_bbox(bbox).await.expect("fixture map parses");
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].element_type(), ElementType::Node);
    assert_eq!(elements[1].element_type(), ElementType::Way);

    let captured = request.await.expect("request captured");
    assert!(captured.target.starts_with("/api/0.6/map.json?bbox="));
}
