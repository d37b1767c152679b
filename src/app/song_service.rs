//! The song service.
//!
//! Orchestrates the music-info lookup and the song store. Methods return a typed
//! result that keeps "song absent" (`SongServiceError::NotFound`) apart from
//! "operation failed"; `log_outcome` turns that result into a log line for callers.

use crate::domain::{NewSong, Page, Song, SongFilter, SongRecord, SongServiceError, SongUpdate};
use crate::infra::music_info::MusicInfoApi;
use crate::storage::songs::SongRepository;
use std::sync::Arc;
use uuid::Uuid;

pub const OP_CREATE: &str = "song.CreateSong";
pub const OP_GET_BY_ID: &str = "song.GetSongByID";
pub const OP_GET_ALL: &str = "song.GetAllSongs";
pub const OP_UPDATE: &str = "song.UpdateSong";
pub const OP_DELETE: &str = "song.DeleteSong";

#[derive(Clone)]
pub struct SongService {
    repo: Arc<dyn SongRepository>,
    music_info: Arc<dyn MusicInfoApi>,
}

impl SongService {
    pub fn new(repo: Arc<dyn SongRepository>, music_info: Arc<dyn MusicInfoApi>) -> Self {
        Self { repo, music_info }
    }

    pub fn repository(&self) -> &Arc<dyn SongRepository> {
        &self.repo
    }

    /// Resolves details with the music-info service, then inserts the row.
    /// Nothing is written when the lookup fails.
    pub async fn create_song(&self, new_song: &NewSong) -> Result<Song, SongServiceError> {
        tracing::info!(op = OP_CREATE, group = %new_song.group, title = %new_song.song, "fetching song details from external API");

        let details = self
            .music_info
            .song_details(&new_song.group, &new_song.song)
            .await
            .map_err(|source| SongServiceError::Lookup { op: OP_CREATE, source })?;

        let record = SongRecord::from_lookup(new_song, details);

        tracing::debug!(op = OP_CREATE, "creating database row");
        self.repo
            .create(&record)
            .await
            .map_err(|e| SongServiceError::from_repository(OP_CREATE, e))
    }

    pub async fn get_song_by_id(&self, id: Uuid) -> Result<Song, SongServiceError> {
        tracing::info!(op = OP_GET_BY_ID, %id, "getting song from database");
        self.repo
            .get_by_id(id)
            .await
            .map_err(|e| SongServiceError::from_repository(OP_GET_BY_ID, e))
    }

    pub async fn get_all_songs(
        &self,
        filters: &[SongFilter],
        page: Page,
    ) -> Result<Vec<Song>, SongServiceError> {
        tracing::info!(op = OP_GET_ALL, ?filters, limit = page.limit, offset = page.offset, "getting songs from database");
        self.repo
            .get_all(filters, page)
            .await
            .map_err(|e| SongServiceError::from_repository(OP_GET_ALL, e))
    }

    pub async fn update_song(&self, id: Uuid, update: &SongUpdate) -> Result<(), SongServiceError> {
        tracing::info!(op = OP_UPDATE, %id, "updating song");
        self.repo
            .update(id, update)
            .await
            .map_err(|e| SongServiceError::from_repository(OP_UPDATE, e))
    }

    pub async fn delete_song(&self, id: Uuid) -> Result<(), SongServiceError> {
        tracing::info!(op = OP_DELETE, %id, "deleting song");
        self.repo
            .delete(id)
            .await
            .map_err(|e| SongServiceError::from_repository(OP_DELETE, e))
    }
}

/// info on success, warn when the song is absent, error for anything else.
pub fn log_outcome<T>(op: &'static str, result: &Result<T, SongServiceError>) {
    match result {
        Ok(_) => tracing::info!(op, "operation succeeded"),
        Err(e) if e.is_not_found() => tracing::warn!(op, error = %e, "song not found"),
        Err(e) => tracing::error!(op, error = %e, "operation failed"),
    }
}
