//! Song persistence.

pub mod memory;
pub mod postgres;

pub use memory::InMemorySongStore;
pub use postgres::PostgresSongStore;

use crate::domain::{Page, RepositoryError, Song, SongFilter, SongRecord, SongUpdate};
use async_trait::async_trait;
use uuid::Uuid;

/// Contract between the song service and a backing store.
///
/// Zero rows for a keyed operation (`get_by_id`, `update`, `delete`) is
/// `RepositoryError::NotFound`; an empty listing is just an empty vector.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Inserts a row; the store assigns `id` and `created_at`.
    async fn create(&self, record: &SongRecord) -> Result<Song, RepositoryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Song, RepositoryError>;

    async fn get_all(&self, filters: &[SongFilter], page: Page) -> Result<Vec<Song>, RepositoryError>;

    /// Applies the set fields and always refreshes `updated_at`.
    async fn update(&self, id: Uuid, update: &SongUpdate) -> Result<(), RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
