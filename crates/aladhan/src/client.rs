//! Request building and response relaying for the Aladhan API.

use std::time::Duration;

/// Default public Aladhan API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com";

/// Default prayer-time calculation method (ISNA).
pub const DEFAULT_METHOD: u8 = 2;

/// Per-request timeout for upstream calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration handle for the upstream prayer-times service.
///
/// Cheap to clone; the inner `reqwest::Client` is already reference-counted.
#[derive(Debug, Clone)]
pub struct AladhanClient {
    http: reqwest::Client,
    base_url: String,
}

/// Errors that can occur when calling the upstream API.
///
/// Messages are logged at the boundary, never relayed to API callers.
#[derive(Debug, thiserror::Error)]
pub enum AladhanError {
    /// Network-level failure (DNS, connect, timeout).
    #[error("Upstream request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-2xx status.
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Upstream body was not valid JSON.
    #[error("Upstream response decode failed: {0}")]
    Decode(String),
}

impl AladhanClient {
    /// Create a client targeting the given base URL (no trailing slash).
    pub fn new(base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| panic!("Failed to build HTTP client: {e}"));

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/v1/timings` — prayer times for a coordinate pair.
    pub async fn timings(
        &self,
        latitude: f64,
        longitude: f64,
        method: u8,
    ) -> Result<serde_json::Value, AladhanError> {
        let url = format!("{}/v1/timings", self.base_url);
        self.relay(
            self.http.get(&url).query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("method", method.to_string()),
            ]),
        )
        .await
    }

    /// GET `/v1/timingsByCity` — prayer times for a city/country pair.
    pub async fn timings_by_city(
        &self,
        city: &str,
        country: &str,
        method: u8,
    ) -> Result<serde_json::Value, AladhanError> {
        let url = format!("{}/v1/timingsByCity", self.base_url);
        self.relay(
            self.http.get(&url).query(&[
                ("city", city),
                ("country", country),
                ("method", &method.to_string()),
            ]),
        )
        .await
    }

    /// GET `/v1/gToH` — convert a Gregorian date (`D-M-YYYY`) to Hijri.
    pub async fn gregorian_to_hijri(
        &self,
        date: &str,
    ) -> Result<serde_json::Value, AladhanError> {
        let url = format!("{}/v1/gToH", self.base_url);
        self.relay(self.http.get(&url).query(&[("date", date)])).await
    }

    /// Send a prepared request and relay the JSON body verbatim.
    async fn relay(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<serde_json::Value, AladhanError> {
        let response = request
            .send()
            .await
            .map_err(|e| AladhanError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AladhanError::Status(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AladhanError::Decode(e.to_string()))
    }
}
