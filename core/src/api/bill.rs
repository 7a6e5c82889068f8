//! Billing statistics per user and per order.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

/// Filters for the bill listings. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BillQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }
}

impl AdminClient {
    pub fn build_user_bill(&self, query: &BillQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/bill/user_bill").with_query(query)
    }

    pub fn build_order_bill(&self, query: &BillQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/bill/order_bill").with_query(query)
    }

    /// Orders purchased at `purchase_time`, forwarded verbatim.
    pub fn build_order_detail(&self, purchase_time: &str) -> HttpRequest {
        self.request(HttpMethod::Get, "/bill/order_detail")
            .with_query_pair("purchaseTime", purchase_time)
    }
}
