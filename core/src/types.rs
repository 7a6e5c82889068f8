//! Response envelope shared by every backend endpoint.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The core never decodes responses on its own; callers opt into these via
//! `HttpResponse::json`. Integration tests catch schema drift between the two
//! crates.

use serde::{Deserialize, Serialize};

/// `{ "code": .., "msg": .., "data": .. }` wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// The backend signals success with code 200 inside a 2xx response.
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageData<T> {
    pub records: Vec<T>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_msg_or_data() {
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(r#"{"code":500}"#).unwrap();
        assert!(!env.is_ok());
        assert_eq!(env.msg, "");
        assert!(env.data.is_none());
    }

    #[test]
    fn envelope_with_page() {
        let env: ApiEnvelope<PageData<u32>> =
            serde_json::from_str(r#"{"code":200,"msg":"ok","data":{"records":[1,2],"total":2}}"#).unwrap();
        assert!(env.is_ok());
        assert_eq!(env.data.unwrap().records, vec![1, 2]);
    }
}
