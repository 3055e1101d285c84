//! End-to-end smoke run against httpbin.org.
//!
//! Run with: cargo run --example smoke

use cartage_http::{FormPart, HttpClient, HttpClientConfig, HttpResponse};
use std::collections::HashMap;

fn print_response(name: &str, response: &HttpResponse) {
    println!("--- {} ---", name);
    println!("Status: {}", response.status_code);
    for (key, value) in &response.headers {
        println!("  {}: {}", key, value);
    }
    match response.text() {
        Ok(text) => println!("{}\n", text),
        Err(_) => println!("({} bytes of binary body)\n", response.body.len()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = HttpClient::new(HttpClientConfig::default());

    let response = client.get("https://httpbin.org/get", &HashMap::new())?;
    print_response("GET", &response);

    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    let response = client.post(
        "https://httpbin.org/post",
        r#"{"name": "test", "value": 42}"#,
        &headers,
    )?;
    print_response("POST", &response);

    let parts = vec![FormPart::text("field1", "value1")];
    let response = client.post_form("https://httpbin.org/post", &parts, &HashMap::new())?;
    print_response("POST multipart", &response);

    Ok(())
}
