//! HTTP client configuration

use std::path::PathBuf;

/// Configuration for [`HttpClient`](crate::HttpClient).
///
/// Immutable once handed to the client; every request issued by that client
/// uses the same timeouts and certificate settings.
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Connection timeout in milliseconds. 0 means no timeout.
    pub connect_timeout_ms: u64,

    /// Total request timeout in milliseconds. 0 means no timeout.
    pub request_timeout_ms: u64,

    /// Optional path to the client certificate file.
    pub client_cert_path: Option<PathBuf>,

    /// Optional path to the client private key file.
    pub client_key_path: Option<PathBuf>,

    /// Optional password for the client private key.
    pub client_key_password: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            client_cert_path: None,
            client_key_path: None,
            client_key_password: None,
        }
    }
}

impl std::fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("client_cert_path", &self.client_cert_path)
            .field("client_key_path", &self.client_key_path)
            .field(
                "client_key_password",
                &self.client_key_password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl HttpClientConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection timeout in milliseconds.
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Set the total request timeout in milliseconds.
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Set the client certificate path.
    pub fn client_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_cert_path = Some(path.into());
        self
    }

    /// Set the client private key path.
    pub fn client_key(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_key_path = Some(path.into());
        self
    }

    /// Set the password for the client private key.
    pub fn key_password(mut self, password: impl Into<String>) -> Self {
        self.client_key_password = Some(password.into());
        self
    }
}
