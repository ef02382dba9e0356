//! Remote CSV export over HTTP.

use std::time::Duration;

use super::csv_decode::decode_csv;
use super::errors::{SourceError, SourceResult};
use super::{SnapshotFuture, SnapshotSource};

/// San Francisco open data export of mobile food facility permits
pub const DEFAULT_SOURCE_URL: &str = "https://data.sfgov.org/api/views/rqzj-sfat/rows.csv";

/// Downloads the CSV export on every fetch
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSnapshotSource {
    /// Create a source with a per-request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> SourceResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn download(&self) -> SourceResult<String> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

impl SnapshotSource for HttpSnapshotSource {
    fn fetch_snapshot(&self) -> SnapshotFuture<'_> {
        Box::pin(async move {
            let text = self.download().await?;
            decode_csv(&text)
        })
    }

    fn describe(&self) -> String {
        format!("http({})", self.url)
    }
}
