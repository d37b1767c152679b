use crate::domain::{NewSong, Song, SongUpdate};
use crate::transport::http::handlers::{health, songs};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse, MessageResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::ping_handler,
        health::healthcheck_handler,
        songs::create_song_handler,
        songs::list_songs_handler,
        songs::get_song_handler,
        songs::update_song_handler,
        songs::delete_song_handler
    ),
    components(schemas(
        Song,
        NewSong,
        SongUpdate,
        ErrorResponse,
        MessageResponse,
        HealthResponse
    )),
    tags((name = "songs", description = "Song library"))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/ping", get(health::ping_handler))
        .route(
            "/api/songs",
            get(songs::list_songs_handler).post(songs::create_song_handler),
        )
        .route(
            "/api/songs/",
            get(songs::list_songs_handler).post(songs::create_song_handler),
        )
        .route(
            "/api/songs/:id",
            get(songs::get_song_handler)
                .patch(songs::update_song_handler)
                .delete(songs::delete_song_handler),
        )
        .with_state(app_state)
}
