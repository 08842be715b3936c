//! Dataset retrieval
//!
//! A `DatasetSource` fetches the travel data from one fixed location (a local
//! path or an HTTP URL). `resolve` turns any retrieval failure into the
//! built-in fallback dataset, so callers always get something to render.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

use crate::models::{Dataset, fallback_dataset};
use crate::{GuideError, Result};

/// Default location of the travel data file, relative to the working directory
pub const DEFAULT_DATA_LOCATION: &str = "data/travel_data.json";

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location (path or URL) used in diagnostics
    fn location(&self) -> &str;

    async fn fetch(&self) -> Result<Dataset>;
}

/// Fetches the dataset over HTTP
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("heyuan-guide/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GuideError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Dataset> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| GuideError::network(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GuideError::status(status.as_u16(), &self.url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GuideError::network(format!("Failed to read response body: {e}")))?;

        debug!("Received {} bytes of travel data", body.len());
        Dataset::from_json(&body)
    }
}

/// Reads the dataset from a local file
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.to_string_lossy().into_owned();
        Self { path, display }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn location(&self) -> &str {
        &self.display
    }

    #[instrument(skip(self), fields(path = %self.display))]
    async fn fetch(&self) -> Result<Dataset> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes of travel data", content.len());
        Dataset::from_json(&content)
    }
}

/// Pick a source for a configured location: URLs go over HTTP, anything else
/// is treated as a file path.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn DatasetSource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(GuideError::config("Data location cannot be empty"));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Where the resolved dataset came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Fetched { location: String },
    Fallback { location: String, reason: String },
}

impl Origin {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Origin::Fallback { .. })
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Fetched { .. } => "fetched",
            Origin::Fallback { .. } => "fallback",
        }
    }
}

/// The dataset every renderer receives, plus how it was obtained
#[derive(Debug, Clone)]
pub struct Resolution {
    pub dataset: Dataset,
    pub origin: Origin,
    pub resolved_at: DateTime<Utc>,
}

/// Fetch the dataset once; on any failure substitute the fallback dataset.
pub async fn resolve(source: &dyn DatasetSource) -> Resolution {
    let location = source.location().to_string();
    info!("Loading travel data from {}", location);
    let start_time = Instant::now();

    let (dataset, origin) = match source.fetch().await {
        Ok(dataset) => {
            info!(
                hotels = dataset.hotels.len(),
                days = dataset.itinerary.len(),
                attractions = dataset.attractions.len(),
                "Travel data loaded successfully in {:.3}s",
                start_time.elapsed().as_secs_f64()
            );
            (dataset, Origin::Fetched { location })
        }
        Err(e) => {
            error!("Error loading travel data from {}: {}", location, e);
            info!("Loading fallback data");
            (
                fallback_dataset(),
                Origin::Fallback {
                    location,
                    reason: e.to_string(),
                },
            )
        }
    };

    Resolution {
        dataset,
        origin,
        resolved_at: Utc::now(),
    }
}
