//! Phone number inventory.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A phone record as sent on add and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Bulk action applied to several numbers at once (e.g. `"enable"`,
/// `"disable"`, `"delete"`); the backend defines the accepted actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneBatch {
    pub action: String,
    pub phone_ids: Vec<i64>,
}

impl AdminClient {
    pub fn build_list_phones(&self, query: &PhoneQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/phone").with_query(query)
    }

    pub fn build_add_phone(&self, form: &PhoneForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/phone").with_json(form)
    }

    /// The path segment is taken from `form.phone_id`; a missing id leaves
    /// it empty and the whole form still goes in the body.
    pub fn build_update_phone(&self, form: &PhoneForm) -> Result<HttpRequest, ApiError> {
        let segment = form.phone_id.map(|id| id.to_string()).unwrap_or_default();
        self.request(HttpMethod::Put, &format!("/phone/{segment}"))
            .with_json(form)
    }

    pub fn build_delete_phone(&self, phone_id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, "/phone")
            .with_query_pair("phoneId", phone_id)
    }

    pub fn build_batch_phones(&self, batch: &PhoneBatch) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/phone/batch").with_json(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AdminClient {
        AdminClient::new("http://localhost:3000")
    }

    fn body(req: &HttpRequest) -> serde_json::Value {
        serde_json::from_str(req.body.as_ref().unwrap().as_json().unwrap()).unwrap()
    }

    #[test]
    fn list_phones_query() {
        let query = PhoneQuery {
            page: Some(1),
            page_size: Some(20),
            region_id: Some(3),
            ..Default::default()
        };
        let req = client().build_list_phones(&query).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.full_url(),
            "http://localhost:3000/phone?page=1&pageSize=20&regionId=3"
        );
    }

    #[test]
    fn add_phone_body() {
        let form = PhoneForm {
            phone: Some("13800000000".to_string()),
            project_id: Some(5),
            ..Default::default()
        };
        let req = client().build_add_phone(&form).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/phone");
        assert_eq!(body(&req), serde_json::json!({"phone": "13800000000", "projectId": 5}));
    }

    #[test]
    fn update_phone_puts_id_in_path_and_body() {
        let form = PhoneForm {
            phone_id: Some(77),
            status: Some(0),
            ..Default::default()
        };
        let req = client().build_update_phone(&form).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/phone/77");
        assert!(req.query.is_empty());
        assert_eq!(body(&req), serde_json::json!({"phoneId": 77, "status": 0}));
    }

    #[test]
    fn update_phone_without_id_is_forwarded() {
        let req = client().build_update_phone(&PhoneForm::default()).unwrap();
        assert_eq!(req.url, "http://localhost:3000/phone/");
    }

    #[test]
    fn delete_puts_phone_id_in_query() {
        let req = client().build_delete_phone(77);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.full_url(), "http://localhost:3000/phone?phoneId=77");
        assert!(req.body.is_none());
    }

    #[test]
    fn batch_body() {
        let batch = PhoneBatch {
            action: "disable".to_string(),
            phone_ids: vec![1, 2, 3],
        };
        let req = client().build_batch_phones(&batch).unwrap();
        assert_eq!(req.url, "http://localhost:3000/phone/batch");
        assert_eq!(body(&req), serde_json::json!({"action": "disable", "phoneIds": [1, 2, 3]}));
    }
}
