//! HTTP response types

use crate::error::{HttpError, HttpResult};
use std::collections::HashMap;

/// An HTTP response: status code, raw body bytes, and response headers.
///
/// Header names are stored as received from the wire (case-observed) and the
/// map compares them case-sensitively; on duplicate header names the last
/// occurrence wins. Use [`HttpResponse::header`] for a case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// HTTP status code of the completed transfer.
    pub status_code: u32,

    /// Response body bytes, in arrival order.
    pub body: Vec<u8>,

    /// Response headers, trimmed, last occurrence winning.
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Returns true if the status is a success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Returns true if the status is a redirect (3xx).
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Returns true if the status is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Returns true if the status is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Body decoded as UTF-8 text.
    pub fn text(&self) -> HttpResult<String> {
        String::from_utf8(self.body.clone())
            .map_err(|e| HttpError::Decode(format!("invalid UTF-8 in response body: {}", e)))
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> HttpResult<serde_json::Value> {
        serde_json::from_slice(&self.body)
            .map_err(|e| HttpError::Decode(format!("invalid JSON in response body: {}", e)))
    }

    /// Get a header value by name, comparing names case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The Content-Type header value, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

/// Split one raw header line into a trimmed (name, value) pair.
///
/// Lines without a `:` separator (the status line, the blank terminator) are
/// not header fields and yield `None`. Names are trimmed of spaces and tabs,
/// values additionally of trailing CR/LF.
pub(crate) fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim_matches([' ', '\t']);
    let value = value
        .trim_start_matches([' ', '\t'])
        .trim_end_matches([' ', '\t', '\r', '\n']);
    Some((name.to_string(), value.to_string()))
}
