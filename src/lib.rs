pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::song_service::SongService;
pub use domain::{NewSong, Page, Song, SongFilter, SongUpdate};
pub use infra::config::Config;
pub use infra::music_info::{MusicInfoApi, MusicInfoClient};
pub use storage::songs::{InMemorySongStore, PostgresSongStore, SongRepository};
