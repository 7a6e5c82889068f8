//! Announcements shown on the public bar.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Publish payload. Leaving `id` unset publishes a new announcement; setting
/// it updates the existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminClient {
    pub fn build_publish_announcement(&self, form: &AnnouncementForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/announcement/publishOrUpdate")
            .with_json(form)
    }

    pub fn build_list_announcements(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/announcement")
    }

    pub fn build_delete_announcement(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, "/announcement")
            .with_query_pair("id", id)
    }
}
