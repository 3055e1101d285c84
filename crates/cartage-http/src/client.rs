//! HTTP client facade

use crate::config::HttpClientConfig;
use crate::error::HttpResult;
use crate::form::FormPart;
use crate::response::HttpResponse;
use crate::session::Session;
use std::collections::HashMap;
use tracing::debug;

/// Blocking HTTP client over libcurl.
///
/// Each call to [`get`](Self::get), [`post`](Self::post), or
/// [`post_form`](Self::post_form) runs on a fresh easy handle, so a single
/// client can serve concurrent requests from multiple threads without any
/// shared transfer state. The client is deliberately not `Clone`: ownership
/// of the configuration is never duplicated silently, but the value itself
/// can be moved.
///
/// # Example
///
/// ```no_run
/// use cartage_http::{HttpClient, HttpClientConfig};
/// use std::collections::HashMap;
///
/// let client = HttpClient::new(HttpClientConfig::default());
/// let response = client.get("https://example.com", &HashMap::new())?;
/// println!("status: {}", response.status_code);
/// # Ok::<(), cartage_http::HttpError>(())
/// ```
#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a client with the given configuration.
    ///
    /// Forces the engine's process-wide initialization on first use; if that
    /// global initialization fails the process aborts, since no degraded mode
    /// exists once transfers require global state. Global cleanup is left to
    /// process exit.
    pub fn new(config: HttpClientConfig) -> Self {
        curl::init();
        Self { config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Perform a GET request.
    pub fn get(&self, url: &str, headers: &HashMap<String, String>) -> HttpResult<HttpResponse> {
        debug!("GET {}", url);
        Session::new(&self.config).perform(url, None, None, headers)
    }

    /// Perform a POST request with a raw body.
    ///
    /// A `Content-Type` header is recommended; none is set implicitly.
    pub fn post(
        &self,
        url: &str,
        body: impl AsRef<[u8]>,
        headers: &HashMap<String, String>,
    ) -> HttpResult<HttpResponse> {
        debug!("POST {}", url);
        Session::new(&self.config).perform(url, Some(body.as_ref()), None, headers)
    }

    /// Perform a multipart/form-data POST request.
    ///
    /// Parts are sent in the order given.
    pub fn post_form(
        &self,
        url: &str,
        parts: &[FormPart],
        headers: &HashMap<String, String>,
    ) -> HttpResult<HttpResponse> {
        debug!("POST {} ({} form parts)", url, parts.len());
        Session::new(&self.config).perform(url, None, Some(parts), headers)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(HttpClientConfig::default())
    }
}
