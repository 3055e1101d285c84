//! Per-call transport session
//!
//! Each session owns exactly one request/response cycle: it configures a
//! fresh easy handle, wires the body and header sinks, performs the transfer,
//! and reads the final status code. The handle, the header list, and the
//! multipart form are all created per call and dropped on every exit path,
//! so concurrent sessions never share engine state.

use crate::config::HttpClientConfig;
use crate::error::{HttpError, HttpResult};
use crate::form::{FormContents, FormPart};
use crate::response::{parse_header_line, HttpResponse};
use curl::easy::{Easy, Form, List, SslVersion};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("cartage-http/", env!("CARGO_PKG_VERSION"));

pub(crate) struct Session<'a> {
    config: &'a HttpClientConfig,
}

impl<'a> Session<'a> {
    pub(crate) fn new(config: &'a HttpClientConfig) -> Self {
        Self { config }
    }

    /// Execute one request. When both a raw body and form parts are given,
    /// the form parts win; the public API never supplies both.
    pub(crate) fn perform(
        &self,
        url: &str,
        body: Option<&[u8]>,
        parts: Option<&[FormPart]>,
        headers: &HashMap<String, String>,
    ) -> HttpResult<HttpResponse> {
        if url.is_empty() {
            return Err(HttpError::Handle("empty URL".to_string()));
        }

        let mut easy = Easy::new();
        self.configure(&mut easy, url)
            .map_err(|e| HttpError::Handle(e.to_string()))?;

        if !headers.is_empty() {
            let list = build_header_list(headers).map_err(|e| HttpError::Handle(e.to_string()))?;
            easy.http_headers(list)
                .map_err(|e| HttpError::Handle(e.to_string()))?;
        }

        if let Some(parts) = parts {
            let form = build_form(parts)?;
            easy.httppost(form)
                .map_err(|e| HttpError::Handle(e.to_string()))?;
        } else if let Some(body) = body {
            ensure_postable(body.len() as u64)?;
            easy.post(true).map_err(|e| HttpError::Handle(e.to_string()))?;
            easy.post_fields_copy(body)
                .map_err(|e| HttpError::Handle(e.to_string()))?;
        }

        let mut response_body: Vec<u8> = Vec::new();
        let mut response_headers: HashMap<String, String> = HashMap::new();
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|chunk| {
                    // A short write tells the engine to abort the transfer.
                    if response_body.try_reserve(chunk.len()).is_err() {
                        return Ok(0);
                    }
                    response_body.extend_from_slice(chunk);
                    Ok(chunk.len())
                })
                .map_err(|e| HttpError::Handle(e.to_string()))?;
            transfer
                .header_function(|line| {
                    let line = String::from_utf8_lossy(line);
                    if let Some((name, value)) = parse_header_line(&line) {
                        response_headers.insert(name, value);
                    }
                    true
                })
                .map_err(|e| HttpError::Handle(e.to_string()))?;
            transfer.perform().map_err(|e| {
                warn!("transfer to {} failed: {}", url, e);
                HttpError::Transport(e.to_string())
            })?;
        }

        let status_code = easy
            .response_code()
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        debug!(
            "{} completed with status {} ({} body bytes)",
            url,
            status_code,
            response_body.len()
        );

        Ok(HttpResponse {
            status_code,
            body: response_body,
            headers: response_headers,
        })
    }

    /// Options applied to every transfer regardless of method.
    fn configure(&self, easy: &mut Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.connect_timeout(Duration::from_millis(self.config.connect_timeout_ms))?;
        easy.timeout(Duration::from_millis(self.config.request_timeout_ms))?;
        // Never negotiate below TLS 1.2.
        easy.ssl_version(SslVersion::Tlsv12)?;
        easy.follow_location(true)?;
        easy.useragent(USER_AGENT)?;

        if let Some(cert) = &self.config.client_cert_path {
            easy.ssl_cert(cert)?;
        }
        if let Some(key) = &self.config.client_key_path {
            easy.ssl_key(key)?;
        }
        if let Some(password) = &self.config.client_key_password {
            easy.key_password(password)?;
        }
        Ok(())
    }
}

/// The engine's length field for a posted body is a signed 64-bit integer.
/// Fail fast rather than truncate.
pub(crate) fn ensure_postable(len: u64) -> HttpResult<()> {
    if i64::try_from(len).is_err() {
        return Err(HttpError::OversizeBody { len });
    }
    Ok(())
}

fn build_header_list(headers: &HashMap<String, String>) -> Result<List, curl::Error> {
    let mut list = List::new();
    for (name, value) in headers {
        list.append(&format!("{}: {}", name, value))?;
    }
    Ok(list)
}

fn build_form(parts: &[FormPart]) -> HttpResult<Form> {
    let mut form = Form::new();
    for part in parts {
        if part.name.is_empty() {
            return Err(HttpError::Mime("form part with empty field name".to_string()));
        }
        match &part.contents {
            FormContents::Text(value) => {
                form.part(&part.name).contents(value.as_bytes()).add()?;
            }
            FormContents::File { path, content_type } => {
                let mut builder = form.part(&part.name);
                builder.file(path);
                if let Some(ct) = content_type {
                    builder.content_type(ct);
                }
                builder.add()?;
            }
        }
    }
    Ok(form)
}
