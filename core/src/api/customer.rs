//! Customers and the admin-user listing used to pick a merchant.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Customer listing filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminClient {
    pub fn build_list_customers(&self, query: &CustomerQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/customer/user").with_query(query)
    }

    pub fn build_list_admin_users(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/customer/adminUser")
    }

    /// Enable or disable a customer account.
    pub fn build_update_customer_status(&self, user_id: &str, user_status: i32) -> HttpRequest {
        self.request(HttpMethod::Put, "/customer/status")
            .with_query_pair("userId", user_id)
            .with_query_pair("userStatus", user_status)
    }

    pub fn build_edit_customer(&self, form: &CustomerForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, "/customer/edit").with_json(form)
    }

    pub fn build_reset_customer_password(&self, user_id: &str) -> HttpRequest {
        self.request(HttpMethod::Put, "/customer/reset_password")
            .with_query_pair("userId", user_id)
    }

    pub fn build_add_customer(&self, form: &CustomerForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/customer/add").with_json(form)
    }
}
