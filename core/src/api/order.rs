//! Orders and settlement.

use serde::{Deserialize, Serialize};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<i32>,
    /// Backend fields not named above, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminClient {
    pub fn build_list_orders(&self, query: &OrderQuery) -> Result<HttpRequest, ApiError> {
        self.request(HttpMethod::Get, "/admin_web/order").with_query(query)
    }

    /// Settling is a POST with the order id in the query and no body.
    pub fn build_settle_order(&self, order_id: &str) -> HttpRequest {
        self.request(HttpMethod::Post, "/admin_web/order/settle")
            .with_query_pair("orderId", order_id)
    }
}
