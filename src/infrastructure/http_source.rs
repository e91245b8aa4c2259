// HTTP telemetry source implementation
use crate::application::telemetry_source::TelemetrySource;
use crate::domain::error::FetchError;
use crate::domain::range::{ChartMode, RangeDescriptor};
use crate::domain::telemetry::{DailyAggregate, TelemetryRows, TelemetrySample};
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTelemetrySource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTelemetrySource {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_query_url(&self, range: RangeDescriptor) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}range={}",
            self.endpoint,
            separator,
            urlencoding::encode(&range.as_query())
        )
    }

    async fn execute_query(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

/// Decode a response body as the row shape implied by the requested range.
pub fn decode_rows(range: RangeDescriptor, body: &str) -> Result<TelemetryRows, FetchError> {
    let decoded = match range.mode() {
        ChartMode::Line => {
            serde_json::from_str::<Vec<TelemetrySample>>(body).map(TelemetryRows::Samples)
        }
        ChartMode::Bar => {
            serde_json::from_str::<Vec<DailyAggregate>>(body).map(TelemetryRows::Daily)
        }
    };
    decoded.map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl TelemetrySource for HttpTelemetrySource {
    async fn fetch(&self, range: RangeDescriptor) -> Result<TelemetryRows, FetchError> {
        let url = self.build_query_url(range);
        tracing::debug!("Requesting {}", url);

        let body = self.execute_query(&url).await?;
        let rows = decode_rows(range, &body)?;

        tracing::debug!("Decoded {} rows for range {}", rows.len(), range.as_query());
        Ok(rows)
    }
}
