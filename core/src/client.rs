//! Stateless request builder for the admin back-office API.
//!
//! # Design
//! `AdminClient` holds only a `base_url` and carries no mutable state between
//! calls. Every resource module under `api/` adds `build_*` methods to it in
//! its own `impl` block; each produces exactly one `HttpRequest`. Executing
//! the request is the host's job (see `transport::dispatch`).

use crate::config::{normalize_base_url, ClientConfig};
use crate::http::{HttpMethod, HttpRequest};

/// Synchronous, stateless client for the resource endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminClient {
    base_url: String,
}

impl AdminClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Empty request for `path` (must start with `/`).
    pub(crate) fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{path}", self.base_url))
    }
}
