//! cartage-http: blocking HTTP client facade over libcurl.
//!
//! Wraps the `curl` crate to perform GET, POST, and multipart form requests,
//! collecting status code, body, and headers into a plain [`HttpResponse`] value.
//!
//! # Architecture
//!
//! - [`HttpClient`]: public facade holding an immutable [`HttpClientConfig`]
//! - `session`: per-call transport session, one fresh easy handle per request
//! - [`FormPart`]: one named field of a multipart/form-data body
//!
//! Every call allocates its own handle, header list, and (for multipart) form
//! builder, so a single client can be shared across threads. There is no
//! connection pooling, no retry logic, and no async runtime; each call blocks
//! its calling thread for the duration of the exchange.

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod response;
mod session;

pub use client::HttpClient;
pub use config::HttpClientConfig;
pub use error::{HttpError, HttpResult};
pub use form::{FormContents, FormPart};
pub use response::HttpResponse;
