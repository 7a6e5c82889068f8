//! Version artifact uploads.
//!
//! # Design
//! Files up to `CHUNK_THRESHOLD_BYTES` go to the single-request endpoint;
//! anything larger goes to the chunk endpoint. Only the per-chunk request
//! contract lives here: splitting a file and sequencing the chunks is up to
//! the caller.
//!
//! Every request carries the client's authorization key. The key is plain
//! configuration owned by the `VersionClient` value, so two clients with
//! different keys never interfere.

use crate::config::{normalize_base_url, ClientConfig};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::multipart::MultipartForm;
use crate::transport::{Transport, UploadProgress};

/// 10 MiB. Sizes strictly above this use the chunk endpoint.
pub const CHUNK_THRESHOLD_BYTES: u64 = 10 * 1024 * 1024;

/// Key sent when the client was configured without one.
pub const DEFAULT_AUTH_KEY: &str = "c18c6b5d-ad89-4e9e-9e45-211832";

pub fn should_use_chunk_upload(file_size: u64) -> bool {
    file_size > CHUNK_THRESHOLD_BYTES
}

/// Which upload endpoint a file of a given size goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPath {
    Single,
    Chunked,
}

impl UploadPath {
    pub fn for_size(file_size: u64) -> Self {
        if should_use_chunk_upload(file_size) {
            UploadPath::Chunked
        } else {
            UploadPath::Single
        }
    }
}

/// Page selector for the version listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPage {
    pub page: u32,
    pub size: u32,
}

impl Default for VersionPage {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionClient {
    base_url: String,
    auth_key: Option<String>,
}

impl VersionClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            auth_key: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: normalize_base_url(&config.base_url),
            auth_key: config.auth_key.clone(),
        }
    }

    /// Replace the key used by every request built after this call.
    pub fn set_auth_key(&mut self, key: impl Into<String>) {
        self.auth_key = Some(key.into());
    }

    pub fn auth_key(&self) -> &str {
        self.auth_key.as_deref().unwrap_or(DEFAULT_AUTH_KEY)
    }

    fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}/api/version{path}", self.base_url))
            .with_header("authorization", self.auth_key())
    }

    pub fn build_upload_small(&self, form: MultipartForm) -> HttpRequest {
        self.request(HttpMethod::Post, "/upload").with_multipart(form)
    }

    /// One chunk of a large upload. `form` carries the chunk bytes and
    /// whatever correlation fields the backend expects.
    pub fn build_upload_chunk(&self, form: MultipartForm) -> HttpRequest {
        self.request(HttpMethod::Post, "/chunk-upload").with_multipart(form)
    }

    pub fn build_upload_progress(&self, identifier: &str) -> HttpRequest {
        self.request(HttpMethod::Get, &format!("/upload-progress/{identifier}"))
    }

    pub fn build_cancel_upload(&self, identifier: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("/cancel-upload/{identifier}"))
    }

    pub fn build_version_list(&self, page: VersionPage) -> HttpRequest {
        self.request(HttpMethod::Get, "/list")
            .with_query_pair("page", page.page)
            .with_query_pair("size", page.size)
    }

    /// Pick the endpoint for a file of `file_size` bytes.
    pub fn build_upload(&self, form: MultipartForm, file_size: u64) -> (UploadPath, HttpRequest) {
        let path = UploadPath::for_size(file_size);
        let request = match path {
            UploadPath::Single => self.build_upload_small(form),
            UploadPath::Chunked => self.build_upload_chunk(form),
        };
        (path, request)
    }

    /// Build and send an upload for `file_size` bytes.
    ///
    /// Single uploads report transport progress to `on_progress`; a chunk
    /// request is sent as-is without progress reporting. The transport's
    /// result is returned unmodified either way.
    pub fn upload<T: Transport>(
        &self,
        transport: &T,
        form: MultipartForm,
        file_size: u64,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<HttpResponse, T::Error> {
        let (path, request) = self.build_upload(form, file_size);
        tracing::debug!(?path, file_size, url = %request.url, "dispatching version upload");
        match path {
            UploadPath::Single => transport.execute_with_progress(request, on_progress),
            UploadPath::Chunked => transport.execute(request),
        }
    }
}
