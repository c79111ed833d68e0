//! Dataset Sources
//!
//! The ingress collaborator: fetches a JSON array of arbitrary-shape records
//! over HTTP(S) or from a local file. Projection onto the Column Set happens
//! later, in the dataset store.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::domain::config::SourceConfig;
use crate::error::{Error, Result};

/// Anything that can produce the raw dataset records
pub trait RecordSource {
    /// Human-readable location for logs and status lines
    fn describe(&self) -> String;

    /// Fetch every record. This is the grid's only suspend point.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Value>>> + Send;
}

/// Accept a JSON array of records; anything else is a decode error
pub fn parse_records(body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(records) => Ok(records),
        other => Err(Error::Invalid {
            message: format!("expected a JSON array of records, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Records served by an HTTP(S) endpoint
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with a request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Value>> {
        tracing::info!("Fetching dataset from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        parse_records(body)
    }
}

/// Records stored in a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Value>> {
        tracing::info!("Reading dataset from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path).await?;
        let body: Value = serde_json::from_str(&content)?;
        parse_records(body)
    }
}

/// Source picked from a configured location
#[derive(Debug, Clone)]
pub enum DatasetSource {
    Http(HttpSource),
    File(FileSource),
}

impl DatasetSource {
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is read as a file path.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let location = config.url.trim();
        if location.is_empty() {
            return Err(Error::Invalid {
                message: "dataset source is empty".to_string(),
            });
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            let timeout = Duration::from_secs(config.timeout_secs.max(1));
            Ok(Self::Http(HttpSource::new(location, timeout)?))
        } else {
            Ok(Self::File(FileSource::new(location)))
        }
    }
}

impl RecordSource for DatasetSource {
    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Value>> {
        match self {
            Self::Http(source) => source.fetch().await,
            Self::File(source) => source.fetch().await,
        }
    }
}
