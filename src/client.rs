//! Client for the remote building-data service.
//!
//! The service exposes one capability this crate depends on: return the
//! recorded (timestamp, value) series for a sensor identifier. Connection
//! lifecycle, retries and authentication belong to the service side; fetch
//! errors propagate to the caller unhandled.

use crate::config::Config;
use crate::core::Reading;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Data-service client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the data service
    pub endpoint_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new client configuration.
    pub fn new(endpoint_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout_secs,
        }
    }

    /// Get the base URL without a trailing slash.
    pub fn url(&self) -> String {
        self.endpoint_url.trim_end_matches('/').to_string()
    }

    /// Get the readings endpoint URL.
    pub fn readings_url(&self) -> String {
        format!("{}/v1/readings", self.url())
    }

    /// Get the health check endpoint URL.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.url())
    }
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self::new(config.endpoint_url.clone(), config.timeout_secs)
    }
}

/// Data-service client error types.
#[derive(Debug)]
pub enum ClientError {
    /// Configuration error
    Config(String),
    /// Network/HTTP error
    Network(String),
    /// Server returned an error response
    Server { status: u16, message: String },
    /// Response body did not decode
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Config(msg) => write!(f, "Data service config error: {msg}"),
            ClientError::Network(msg) => write!(f, "Data service network error: {msg}"),
            ClientError::Server { status, message } => {
                write!(f, "Data service error ({status}): {message}")
            }
            ClientError::Decode(msg) => write!(f, "Data service decode error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// One row of the readings response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingRow {
    /// Sample timestamp (RFC3339)
    pub time: DateTime<Utc>,
    /// Sample value
    pub value: f64,
}

impl From<ReadingRow> for Reading {
    fn from(row: ReadingRow) -> Self {
        Reading::new(row.time, row.value)
    }
}

/// Response from the readings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingsResponse {
    /// Rows for the requested sensor
    pub readings: Vec<ReadingRow>,
}

/// Async client for the building-data service.
pub struct DataServiceClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl DataServiceClient {
    /// Create a new data-service client.
    pub fn new(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Test connection to the data service.
    pub async fn test_connection(&self) -> Result<bool, ClientError> {
        let response = self
            .client
            .get(self.config.health_url())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }

    /// Fetch the recorded series for a sensor identifier.
    pub async fn fetch_readings(&self, sensor: &str) -> Result<Vec<Reading>, ClientError> {
        if sensor.is_empty() {
            return Err(ClientError::Config("Empty sensor identifier".to_string()));
        }

        let response = self
            .client
            .get(self.config.readings_url())
            .query(&[("sensor", sensor)])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body: ReadingsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        let readings: Vec<Reading> = body.readings.into_iter().map(Reading::from).collect();
        tracing::info!(sensor, count = readings.len(), "fetched sensor series");
        Ok(readings)
    }
}

/// Blocking data-service client for use in synchronous contexts.
pub struct BlockingDataServiceClient {
    inner: DataServiceClient,
    runtime: tokio::runtime::Runtime,
}

impl BlockingDataServiceClient {
    /// Create a new blocking data-service client.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create runtime: {e}")))?;

        Ok(Self {
            inner: DataServiceClient::new(config),
            runtime,
        })
    }

    /// Test connection to the data service.
    pub fn test_connection(&self) -> Result<bool, ClientError> {
        self.runtime.block_on(self.inner.test_connection())
    }

    /// Fetch the recorded series for a sensor identifier.
    pub fn fetch_readings(&self, sensor: &str) -> Result<Vec<Reading>, ClientError> {
        self.runtime.block_on(self.inner.fetch_readings(sensor))
    }
}
