//! Error types for each layer. Every variant carries the name of the operation that
//! produced it so messages read like `song.CreateSong: storage.Create: ...`.

use thiserror::Error;

/// Failure talking to the external music-info service.
#[derive(Debug, Error)]
pub enum MusicInfoError {
    #[error("failed to call music info API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected response status: {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{op}: song not found")]
    NotFound { op: &'static str },
    #[error("{op}: {source}")]
    Database {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl RepositoryError {
    pub fn database(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| RepositoryError::Database { op, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum SongServiceError {
    #[error("{op}: {source}")]
    Lookup {
        op: &'static str,
        #[source]
        source: MusicInfoError,
    },
    #[error("{op}: {source}")]
    NotFound {
        op: &'static str,
        #[source]
        source: RepositoryError,
    },
    #[error("{op}: {source}")]
    Repository {
        op: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl SongServiceError {
    /// Wraps a storage error, keeping "absent" apart from "failed".
    pub fn from_repository(op: &'static str, source: RepositoryError) -> Self {
        if source.is_not_found() {
            SongServiceError::NotFound { op, source }
        } else {
            SongServiceError::Repository { op, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SongServiceError::NotFound { .. })
    }
}
