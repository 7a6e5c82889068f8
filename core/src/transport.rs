//! The host-provided HTTP client adapter.
//!
//! # Design
//! The core never performs I/O. A host implements `Transport` on top of
//! whatever HTTP stack it already has (interceptors, auth injection and
//! timeouts live there) and the core passes requests through it. Results are
//! returned exactly as the transport produced them: no status
//! classification, no retries, no error mapping.

use crate::http::{HttpRequest, HttpResponse};

/// Transport-level progress of a request body upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    /// Bytes sent so far.
    pub loaded: u64,
    /// Total body size, when the transport knows it.
    pub total: Option<u64>,
}

impl UploadProgress {
    /// Percentage in `0..=100`, if the total is known and non-zero.
    pub fn percent(&self) -> Option<u8> {
        match self.total {
            Some(total) if total > 0 => Some(((self.loaded.min(total) * 100) / total) as u8),
            _ => None,
        }
    }
}

/// Executes `HttpRequest` values against the network.
pub trait Transport {
    type Error;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;

    /// Execute while reporting upload progress.
    ///
    /// Transports that cannot observe body progress may keep the default,
    /// which never invokes `on_progress`.
    fn execute_with_progress(
        &self,
        request: HttpRequest,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<HttpResponse, Self::Error> {
        let _ = on_progress;
        self.execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).execute(request)
    }

    fn execute_with_progress(
        &self,
        request: HttpRequest,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<HttpResponse, Self::Error> {
        (**self).execute_with_progress(request, on_progress)
    }
}

/// Send one request and hand back whatever the transport returned.
pub fn dispatch<T: Transport>(transport: &T, request: HttpRequest) -> Result<HttpResponse, T::Error> {
    tracing::debug!(method = request.method.as_str(), url = %request.full_url(), "dispatching request");
    transport.execute(request)
}
