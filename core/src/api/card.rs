//! Card merchants ("卡商").
//!
//! Identifiers for the reset, delete and balance actions travel in the
//! query string while add/edit send a JSON body, matching the backend.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardQuery {
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

/// Merchant account fields for add and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminClient {
    pub fn build_list_cards(&self, query: &CardQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/card/list").with_query(query)
    }

    pub fn build_edit_card(&self, form: &CardForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Put, "/card/edit").with_json(form)
    }

    pub fn build_reset_card_password(&self, user_id: &str) -> HttpRequest {
        self.request(HttpMethod::Put, "/card/reset_password")
            .with_query_pair("userId", user_id)
    }

    pub fn build_add_card(&self, form: &CardForm) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Post, "/card/add").with_json(form)
    }

    pub fn build_delete_card(&self, user_id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, "/card/delete")
            .with_query_pair("userId", user_id)
    }

    /// Set the merchant's balance to `amount`.
    pub fn build_update_card_balance(&self, user_id: &str, amount: f64) -> HttpRequest {
        self.request(HttpMethod::Put, "/card/balance")
            .with_query_pair("userId", user_id)
            .with_query_pair("amount", amount)
    }
}
