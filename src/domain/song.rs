//! Song records and the typed inputs used to query and mutate them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted song.
///
/// `id` and `created_at` are assigned by the store on insert and never change;
/// `updated_at` is `None` until the first successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Song {
    pub id: Uuid,
    pub group: String,
    pub title: String,
    /// Opaque text, not validated as a calendar date.
    pub release_date: String,
    pub text: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Caller input for creating a song. Everything else comes from the music-info lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct NewSong {
    pub group: String,
    /// Song title.
    pub song: String,
}

impl NewSong {
    /// Both fields must contain something besides whitespace.
    pub fn validate(&self) -> Result<(), String> {
        if self.group.trim().is_empty() {
            return Err("'group' must not be empty".to_string());
        }
        if self.song.trim().is_empty() {
            return Err("'song' must not be empty".to_string());
        }
        Ok(())
    }
}

/// Metadata resolved by the external music-info service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongDetails {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// Everything needed to insert a row; id and timestamps are left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub group: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

impl SongRecord {
    pub fn from_lookup(new_song: &NewSong, details: SongDetails) -> Self {
        Self {
            group: new_song.group.clone(),
            title: new_song.song.clone(),
            release_date: details.release_date,
            text: details.text,
            link: details.link,
        }
    }
}

/// Equality filter accepted by song listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongFilter {
    Group(String),
    Title(String),
}

impl SongFilter {
    pub fn column(&self) -> &'static str {
        match self {
            SongFilter::Group(_) => "group_name",
            SongFilter::Title(_) => "title",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SongFilter::Group(v) | SongFilter::Title(v) => v,
        }
    }

    pub fn matches(&self, song: &Song) -> bool {
        match self {
            SongFilter::Group(v) => song.group == *v,
            SongFilter::Title(v) => song.title == *v,
        }
    }
}

/// Limit/offset pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT, 0)
    }
}

/// Partial update: each field is changed only when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SongUpdate {
    #[serde(default, alias = "group_name", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl SongUpdate {
    /// Column/value pairs for the fields that are set, in a fixed order.
    pub fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("group_name", self.group.as_deref()),
            ("title", self.title.as_deref()),
            ("release_date", self.release_date.as_deref()),
            ("text", self.text.as_deref()),
            ("link", self.link.as_deref()),
        ]
        .into_iter()
        .filter_map(|(col, v)| v.map(|v| (col, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    pub fn apply_to(&self, song: &mut Song) {
        if let Some(v) = &self.group {
            song.group = v.clone();
        }
        if let Some(v) = &self.title {
            song.title = v.clone();
        }
        if let Some(v) = &self.release_date {
            song.release_date = v.clone();
        }
        if let Some(v) = &self.text {
            song.text = v.clone();
        }
        if let Some(v) = &self.link {
            song.link = v.clone();
        }
    }
}
