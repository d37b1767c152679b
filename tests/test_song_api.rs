//! End-to-end HTTP flow against the real router:
//! in-memory song store + a wiremock stand-in for the music-info service.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use song_library::{transport, InMemorySongStore, MusicInfoClient, SongService};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn music_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .and(query_param("group", "Muse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "releaseDate": "2006-07-16",
            "text": "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?",
            "link": "http://www.youtube.com/watch?v=Xsp3_a-PMTw"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .and(query_param("group", "Unknown"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    server
}

fn app(store: &InMemorySongStore, music: &MockServer) -> Router {
    let client = MusicInfoClient::new(music.uri()).unwrap();
    let service = SongService::new(Arc::new(store.clone()), Arc::new(client));
    transport::http::create_router(transport::http::AppState::new(service))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn create(app: &Router, group: &str, song: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/songs/",
        Some(json!({ "group": group, "song": song })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body
}

#[tokio::test]
async fn test_ping() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);
    let (status, body) = send(&app, Method::GET, "/api/ping", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "pong" }));
}

#[tokio::test]
async fn test_health() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_song_enriches_from_lookup() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);

    let created = create(&app, "Muse", "Supermassive Black Hole").await;
    assert_eq!(created["group"], "Muse");
    assert_eq!(created["title"], "Supermassive Black Hole");
    assert_eq!(created["release_date"], "2006-07-16");
    assert_eq!(created["link"], "http://www.youtube.com/watch?v=Xsp3_a-PMTw");
    assert!(created["text"].as_str().unwrap().contains('\n'));
    let id = created["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/songs/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_failed_lookup_returns_500_and_persists_nothing() {
    let music = music_server().await;
    let store = InMemorySongStore::new();
    let app = app(&store, &music);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/songs",
        Some(json!({ "group": "Unknown", "song": "Nothing" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("song.CreateSong"));
    assert!(store.is_empty().await);

    let (_, list) = send(&app, Method::GET, "/api/songs", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_bad_input_is_400() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);

    let (status, _) = send(&app, Method::POST, "/api/songs/", Some(json!({ "group": "Muse" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/api/songs/", Some(json!({ "group": "", "song": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/api/songs/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid song ID");

    let (status, _) = send(&app, Method::DELETE, "/api/songs/123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/songs?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_song_is_404_on_read_only() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);
    let id = uuid::Uuid::new_v4();

    let (status, body) = send(&app, Method::GET, &format!("/api/songs/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Song not found");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/songs/{}", id),
        Some(json!({ "title": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "song.UpdateSong: storage.Update: song not found");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/songs/{}", id), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "song.DeleteSong: storage.Delete: song not found");
}

#[tokio::test]
async fn test_list_filters_and_pagination() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);
    for i in 0..12 {
        create(&app, "Muse", &format!("Track {}", i)).await;
    }

    let (status, first) = send(&app, Method::GET, "/api/songs/", None).await;
    assert_eq!(status, StatusCode::OK);
    let first = first.as_array().unwrap().clone();
    assert_eq!(first.len(), 10);

    let (_, rest) = send(&app, Method::GET, "/api/songs?limit=10&offset=10", None).await;
    let rest = rest.as_array().unwrap().clone();
    assert_eq!(rest.len(), 2);
    assert!(rest.iter().all(|s| !first.contains(s)));

    let (_, filtered) = send(&app, Method::GET, "/api/songs?group=Muse&title=Track%205", None).await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["title"], "Track 5");

    let (_, blank) = send(&app, Method::GET, "/api/songs?group=&limit=3", None).await;
    assert_eq!(blank.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_and_delete() {
    let music = music_server().await;
    let app = app(&InMemorySongStore::new(), &music);
    let created = create(&app, "Muse", "Starlight").await;
    let uri = format!("/api/songs/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "link": "http://new" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Song updated successfully");

    let (_, updated) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(updated["link"], "http://new");
    assert_eq!(updated["title"], "Starlight");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(created["updated_at"].is_null());
    assert!(updated["updated_at"].is_string());

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "id": "overwrite" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Song deleted successfully");

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
