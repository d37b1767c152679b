use crate::app::song_service::{log_outcome, OP_CREATE, OP_DELETE, OP_GET_ALL, OP_GET_BY_ID, OP_UPDATE};
use crate::domain::{NewSong, Song, SongUpdate};
use crate::transport::http::handlers::common::{
    error_response, parse_song_id, read_error_response, service_error_response,
};
use crate::transport::http::types::{AppState, ErrorResponse, ListSongsQuery, MessageResponse};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/api/songs",
    request_body = NewSong,
    responses(
        (status = 200, description = "Song created", body = Song),
        (status = 400, description = "Invalid JSON body", body = ErrorResponse),
        (status = 500, description = "Lookup or storage failure", body = ErrorResponse)
    )
)]
pub async fn create_song_handler(
    State(state): State<AppState>,
    request: Result<Json<NewSong>, JsonRejection>,
) -> impl IntoResponse {
    let Json(new_song) = match request {
        Ok(v) => v,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e));
        }
    };
    if let Err(msg) = new_song.validate() {
        return error_response(StatusCode::BAD_REQUEST, msg);
    }

    let result = state.song_service.create_song(&new_song).await;
    log_outcome(OP_CREATE, &result);
    match result {
        Ok(song) => (StatusCode::OK, Json(song)).into_response(),
        Err(e) => service_error_response(&e),
    }
}

#[utoipa::path(
    get,
    path = "/api/songs",
    params(ListSongsQuery),
    responses(
        (status = 200, description = "Songs matching the filters", body = Vec<Song>),
        (status = 400, description = "Invalid query string", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_songs_handler(
    State(state): State<AppState>,
    query: Result<Query<ListSongsQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(v) => v,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid query: {}", e));
        }
    };

    let result = state
        .song_service
        .get_all_songs(&query.filters(), query.page())
        .await;
    log_outcome(OP_GET_ALL, &result);
    match result {
        Ok(songs) => (StatusCode::OK, Json(songs)).into_response(),
        Err(e) => service_error_response(&e),
    }
}

#[utoipa::path(
    get,
    path = "/api/songs/{id}",
    params(("id" = String, Path, description = "Song ID (UUID)")),
    responses(
        (status = 200, description = "The song", body = Song),
        (status = 400, description = "Invalid song ID", body = ErrorResponse),
        (status = 404, description = "Song not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_song_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_song_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = state.song_service.get_song_by_id(id).await;
    log_outcome(OP_GET_BY_ID, &result);
    match result {
        Ok(song) => (StatusCode::OK, Json(song)).into_response(),
        Err(e) => read_error_response(&e),
    }
}

#[utoipa::path(
    patch,
    path = "/api/songs/{id}",
    params(("id" = String, Path, description = "Song ID (UUID)")),
    request_body = SongUpdate,
    responses(
        (status = 200, description = "Song updated", body = MessageResponse),
        (status = 400, description = "Invalid song ID or body", body = ErrorResponse),
        (status = 500, description = "Song not found or storage failure", body = ErrorResponse)
    )
)]
pub async fn update_song_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<SongUpdate>, JsonRejection>,
) -> impl IntoResponse {
    let id = match parse_song_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(update) = match request {
        Ok(v) => v,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e));
        }
    };

    let result = state.song_service.update_song(id, &update).await;
    log_outcome(OP_UPDATE, &result);
    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Song updated successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => service_error_response(&e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/songs/{id}",
    params(("id" = String, Path, description = "Song ID (UUID)")),
    responses(
        (status = 200, description = "Song deleted", body = MessageResponse),
        (status = 400, description = "Invalid song ID", body = ErrorResponse),
        (status = 500, description = "Song not found or storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_song_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_song_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let result = state.song_service.delete_song(id).await;
    log_outcome(OP_DELETE, &result);
    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Song deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => service_error_response(&e),
    }
}
