use crate::domain::SongServiceError;
use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: error.into() })).into_response()
}

pub fn parse_song_id(raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw.trim()).map_err(|_| error_response(StatusCode::BAD_REQUEST, "Invalid song ID"))
}

/// Single-song reads: 404 when the song is absent, 500 with the error chain otherwise.
pub fn read_error_response(err: &SongServiceError) -> Response {
    if err.is_not_found() {
        error_response(StatusCode::NOT_FOUND, "Song not found")
    } else {
        service_error_response(err)
    }
}

/// 500 with the error chain, including for an absent song.
pub fn service_error_response(err: &SongServiceError) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
