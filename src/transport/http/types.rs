use crate::app::song_service::SongService;
use crate::domain::{Page, SongFilter};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub song_service: SongService,
}

impl AppState {
    pub fn new(song_service: SongService) -> Self {
        Self { song_service }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query string of `GET /api/songs`. Empty `group`/`title` values are ignored.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSongsQuery {
    /// Exact group name.
    pub group: Option<String>,
    /// Exact song title.
    pub title: Option<String>,
    /// Page size (default 10).
    pub limit: Option<u32>,
    /// Rows to skip (default 0).
    pub offset: Option<u32>,
}

impl ListSongsQuery {
    pub fn filters(&self) -> Vec<SongFilter> {
        let mut filters = Vec::new();
        if let Some(group) = self.group.as_deref().filter(|v| !v.is_empty()) {
            filters.push(SongFilter::Group(group.to_string()));
        }
        if let Some(title) = self.title.as_deref().filter(|v| !v.is_empty()) {
            filters.push(SongFilter::Title(title.to_string()));
        }
        filters
    }

    pub fn page(&self) -> Page {
        Page::new(
            self.limit.unwrap_or(Page::DEFAULT_LIMIT),
            self.offset.unwrap_or(0),
        )
    }
}
