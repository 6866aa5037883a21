use reqwest::Client;
use std::time::Duration;

/// Create a reqwest Client with a request timeout applied to every call.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
