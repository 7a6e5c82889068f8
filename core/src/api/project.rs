//! Projects (the services numbers are rented for) and their icons/keywords.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::multipart::MultipartForm;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Replaces the SMS-matching keywords of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKeywords {
    pub project_id: i64,
    pub keywords: Vec<String>,
}

impl AdminClient {
    pub fn build_list_projects(&self, query: &ProjectQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/admin_web/project").with_query(query)
    }

    pub fn build_add_project(&self, form: &ProjectForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/admin_web/project").with_json(form)
    }

    pub fn build_delete_project(&self, project_id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, "/admin_web/project")
            .with_query_pair("projectId", project_id)
    }

    pub fn build_edit_project(&self, form: &ProjectForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, "/admin_web/project").with_json(form)
    }

    /// `form` is forwarded untouched; the backend expects a `file` part and
    /// the `projectId`.
    pub fn build_upload_project_icon(&self, form: MultipartForm) -> HttpRequest {
        self.request(HttpMethod::Post, "/admin_web/project/upload_project_icon")
            .with_multipart(form)
    }

    pub fn build_update_project_keywords(
        &self,
        keywords: &ProjectKeywords,
    ) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, "/admin_web/project/keywords")
            .with_json(keywords)
    }
}
