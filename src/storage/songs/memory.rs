//! In-process song store with the same observable semantics as the Postgres store.
//! Backs the router and service tests.

use super::SongRepository;
use crate::domain::{Page, RepositoryError, Song, SongFilter, SongRecord, SongUpdate};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemorySongStore {
    songs: Arc<RwLock<Vec<Song>>>,
}

impl InMemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.songs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.songs.read().await.is_empty()
    }
}

#[async_trait]
impl SongRepository for InMemorySongStore {
    async fn create(&self, record: &SongRecord) -> Result<Song, RepositoryError> {
        let song = Song {
            id: Uuid::new_v4(),
            group: record.group.clone(),
            title: record.title.clone(),
            release_date: record.release_date.clone(),
            text: record.text.clone(),
            link: record.link.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        self.songs.write().await.push(song.clone());
        Ok(song)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Song, RepositoryError> {
        self.songs
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { op: "storage.GetByID" })
    }

    async fn get_all(&self, filters: &[SongFilter], page: Page) -> Result<Vec<Song>, RepositoryError> {
        let songs = self.songs.read().await;
        // Insertion order stands in for `ORDER BY created_at, id`.
        Ok(songs
            .iter()
            .filter(|s| filters.iter().all(|f| f.matches(s)))
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, update: &SongUpdate) -> Result<(), RepositoryError> {
        let mut songs = self.songs.write().await;
        let song = songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepositoryError::NotFound { op: "storage.Update" })?;
        update.apply_to(song);
        song.updated_at = Some(Utc::now());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut songs = self.songs.write().await;
        let before = songs.len();
        songs.retain(|s| s.id != id);
        if songs.len() == before {
            return Err(RepositoryError::NotFound { op: "storage.Delete" });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: &str, title: &str) -> SongRecord {
        SongRecord {
            group: group.to_string(),
            title: title.to_string(),
            release_date: "2009-09-14".to_string(),
            text: "verse".to_string(),
            link: "http://example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_filters_and_pagination() {
        let store = InMemorySongStore::new();
        for title in ["A", "B", "C"] {
            store.create(&record("Muse", title)).await.unwrap();
        }
        store.create(&record("Queen", "D")).await.unwrap();

        let muse = store
            .get_all(&[SongFilter::Group("Muse".into())], Page::default())
            .await
            .unwrap();
        assert_eq!(muse.len(), 3);

        let second_page = store
            .get_all(&[SongFilter::Group("Muse".into())], Page::new(2, 2))
            .await
            .unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].title, "C");

        let none = store
            .get_all(&[SongFilter::Title("Z".into())], Page::default())
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_missing_rows_are_not_found() {
        let store = InMemorySongStore::new();
        let id = Uuid::new_v4();
        assert!(store.get_by_id(id).await.unwrap_err().is_not_found());
        assert!(store.update(id, &SongUpdate::default()).await.unwrap_err().is_not_found());
        assert!(store.delete(id).await.unwrap_err().is_not_found());
    }
}
