//! HTTP client for JSON-RPC endpoints

use reqwest::{header, Client};

/// A handle on one RPC endpoint
///
/// Holds a clone of the shared `reqwest::Client`, so every handle reuses
/// the same connection pool.
#[derive(Clone)]
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    /// Create a handle for one endpoint from the shared HTTP client.
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL this handle posts to (for logging and error context).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a JSON-RPC payload and return the raw response body.
    ///
    /// Status codes are not inspected; JSON-RPC errors arrive as ordinary
    /// response bodies and are left to the caller.
    pub async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>, reqwest::Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response.bytes().await?.to_vec())
    }
}
