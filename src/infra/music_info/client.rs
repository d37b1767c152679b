//! HTTP client for the music-info service.
//!
//! The service exposes a single endpoint, `GET <base>/info?group=..&song=..`, answering
//! `{ "releaseDate": .., "text": .., "link": .. }`. One request per call, no retries.

use crate::domain::{MusicInfoError, SongDetails};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Seam for the service layer so tests can substitute a stub.
#[async_trait]
pub trait MusicInfoApi: Send + Sync {
    async fn song_details(&self, group: &str, song: &str) -> Result<SongDetails, MusicInfoError>;
}

#[derive(Clone)]
pub struct MusicInfoClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl MusicInfoClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MusicInfoError> {
        Self::with_timeout(base_url, LOOKUP_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MusicInfoError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MusicInfoError::Transport)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn info_url(&self, group: &str, song: &str) -> String {
        format!(
            "{}/info?group={}&song={}",
            self.base_url,
            urlencoding::encode(group),
            urlencoding::encode(song)
        )
    }
}

#[async_trait]
impl MusicInfoApi for MusicInfoClient {
    async fn song_details(&self, group: &str, song: &str) -> Result<SongDetails, MusicInfoError> {
        let response = self
            .http_client
            .get(self.info_url(group, song))
            .send()
            .await
            .map_err(MusicInfoError::Transport)?;

        if response.status() != StatusCode::OK {
            return Err(MusicInfoError::Status(response.status().as_u16()));
        }

        response
            .json::<SongDetails>()
            .await
            .map_err(MusicInfoError::Decode)
    }
}
