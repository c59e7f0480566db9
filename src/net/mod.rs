// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Network module: one shared HTTP client, one operation.
//!
//! ```text
//! ApiClient::new()
//!     .post_json(url, &payload)
//!          |
//!          v
//!     ApiResponse { status, headers, body }
//! ```
//!
//! Unlike a downloader, a non-2xx status is NOT an error here: callers
//! report the status and body of every response, so the full response is
//! always returned. Only transport failures surface as errors.
//!
//! Global client: OnceLock, connection pool, default reqwest timeouts.

use reqwest::Client;
use serde::Serialize;
use std::sync::OnceLock;

use crate::error::{NetworkError, VoxResult};


/// Global HTTP client - initialized once, reused across requests.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("voxctl/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Everything a caller needs to report about one HTTP exchange.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    /// Whether the platform accepted the request (strict 200, matching
    /// the agent-management contract).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Thin wrapper over the shared client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: global_client().clone(),
        }
    }

    /// POST `body` as JSON to `url` and collect the entire response.
    ///
    /// # Errors
    ///
    /// Returns an error only on transport failure (connection refused,
    /// DNS, timeout); any HTTP status comes back as an [`ApiResponse`].
    pub async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> VoxResult<ApiResponse> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(NetworkError::Reqwest)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(NetworkError::Reqwest)?;

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

/// Agent-management endpoint for a platform host. A bare host (the usual
/// ngrok domain) gets the https scheme; a full URL is used as-is.
#[must_use]
pub fn agent_endpoint(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}/agent", host.trim_end_matches('/'))
    } else {
        format!("https://{host}/agent")
    }
}

/// Telephony-bridge call endpoint. The base URL is taken verbatim from
/// configuration.
#[must_use]
pub fn call_endpoint(base_url: &str) -> String {
    format!("{base_url}/call")
}
