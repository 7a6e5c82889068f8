//! Regions (number origin countries/areas).

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::multipart::MultipartForm;

/// Save payload; without `region_id` the backend creates a new region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminClient {
    pub fn build_list_regions(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/admin_web/region")
    }

    pub fn build_delete_region(&self, region_id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, "/admin_web/region")
            .with_query_pair("regionId", region_id)
    }

    pub fn build_save_region(&self, form: &RegionForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/admin_web/region/saveOrUpdateRegion")
            .with_json(form)
    }

    pub fn build_upload_region_icon(&self, form: MultipartForm) -> HttpRequest {
        self.request(HttpMethod::Post, "/admin_web/region/upload_region_icon")
            .with_multipart(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AdminClient {
        AdminClient::new("http://localhost:3000")
    }

    #[test]
    fn list_regions() {
        let req = client().build_list_regions();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.full_url(), "http://localhost:3000/admin_web/region");
    }

    #[test]
    fn delete_puts_region_id_in_query() {
        let req = client().build_delete_region(4);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.full_url(), "http://localhost:3000/admin_web/region?regionId=4");
        assert!(req.body.is_none());
    }

    #[test]
    fn save_sends_body() {
        let form = RegionForm {
            region_name: Some("香港".to_string()),
            region_code: Some("+852".to_string()),
            ..Default::default()
        };
        let req = client().build_save_region(&form).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/admin_web/region/saveOrUpdateRegion");
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_ref().unwrap().as_json().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"regionName": "香港", "regionCode": "+852"}));
    }

    #[test]
    fn icon_upload_is_multipart() {
        let form = MultipartForm::new().text("regionId", 4);
        let req = client().build_upload_region_icon(form);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/admin_web/region/upload_region_icon");
        assert!(req
            .header("content-type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
    }
}
