//! Domain types shared by storage, service and transport layers.

pub mod error;
pub mod song;

pub use error::{MusicInfoError, RepositoryError, SongServiceError};
pub use song::{NewSong, Page, Song, SongDetails, SongFilter, SongRecord, SongUpdate};
