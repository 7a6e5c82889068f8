//! Synchronous API client core for the admin back-office.
//!
//! # Overview
//! Builds `HttpRequest` values for every backend resource and the version
//! upload endpoints without touching the network (host-does-IO pattern). The
//! host executes requests through its own `Transport`; responses come back
//! unmodified. A static route table with a title-setting navigation guard
//! covers the client-side pages.
//!
//! # Design
//! - `AdminClient` and `VersionClient` are plain values: a base URL, plus the
//!   authorization key for `VersionClient`. No process-wide state.
//! - Each resource lives in its own module under `api/` and adds `build_*`
//!   methods to `AdminClient`.
//! - Response DTOs are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod multipart;
pub mod router;
pub mod transport;
pub mod types;
pub mod version;

pub use client::AdminClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use format::format_id;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestBody};
pub use multipart::MultipartForm;
pub use router::{Document, Location, MemoryDocument, NavigationError, RouteEntry, Router, RouterError};
pub use transport::{dispatch, Transport, UploadProgress};
pub use types::{ApiEnvelope, PageData};
pub use version::{UploadPath, VersionClient, VersionPage, CHUNK_THRESHOLD_BYTES};
