//! Profile of the signed-in admin user.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Profile fields the signed-in admin can change about themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminClient {
    pub fn build_user_info(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/adminUserWeb/info")
    }

    pub fn build_edit_user(&self, form: &UserForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/adminUserWeb/edit").with_json(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AdminClient {
        AdminClient::new("http://localhost:3000")
    }

    #[test]
    fn info_request() {
        let req = client().build_user_info();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.full_url(), "http://localhost:3000/adminUserWeb/info");
        assert!(req.body.is_none());
    }

    #[test]
    fn edit_sends_body() {
        let form = UserForm {
            nickname: Some("运营".to_string()),
            ..Default::default()
        };
        let req = client().build_edit_user(&form).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/adminUserWeb/edit");
        assert!(req.query.is_empty());
        let body: serde_json::Value =
            serde_json::from_str(req.body.as_ref().unwrap().as_json().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"nickname": "运营"}));
    }
}
