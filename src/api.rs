//! HTTP client for the superpixel endpoints.

use crate::config::{SceneConfig, ServerConfig};
use crate::error::ApiError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Body of the superpixel fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchRequest {
    pub srid: u32,
    pub scene_id: i64,
    pub algo_id: i64,
}

impl From<&SceneConfig> for FetchRequest {
    fn from(scene: &SceneConfig) -> Self {
        Self {
            srid: scene.srid,
            scene_id: scene.scene_id,
            algo_id: scene.algo_id,
        }
    }
}

/// One superpixel as returned by the fetch endpoint. `features` is a GeoJSON
/// geometry serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperpixelRecord {
    pub id: i64,
    pub features: String,
    #[serde(default)]
    pub land_class_id: Option<i64>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub superpixel_id: i64,
    pub class_id: i64,
    pub scene_id: i64,
}

/// Body of the label-assignment push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBatch {
    pub upd: Vec<UpdateRecord>,
}

impl UpdateBatch {
    pub fn is_empty(&self) -> bool {
        self.upd.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upd.len()
    }
}

/// Receives label assignments. Callers treat failures as log-only.
pub trait LabelSink {
    fn push(&self, batch: &UpdateBatch) -> Result<(), ApiError>;
}

pub struct SuperpixelClient {
    client: Client,
    fetch_url: String,
    push_url: String,
    csrf_token: Option<String>,
}

impl SuperpixelClient {
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(server.timeout_seconds))
            .build()
            .map_err(|source| ApiError::Transport {
                url: server.base_url.clone(),
                source,
            })?;
        let base = server.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            fetch_url: format!("{base}{}", server.fetch_path),
            push_url: format!("{base}{}", server.push_path),
            csrf_token: server.csrf_token.clone(),
        })
    }

    /// Fetch all superpixels of one scene/algorithm pair.
    pub fn fetch(&self, request: &FetchRequest) -> Result<Vec<SuperpixelRecord>, ApiError> {
        let response = self.post(&self.fetch_url, request)?;
        let records: Vec<SuperpixelRecord> =
            response.json().map_err(|source| ApiError::Decode {
                url: self.fetch_url.clone(),
                source,
            })?;
        info!(
            "Fetched {} superpixels for scene {} (algo {})",
            records.len(),
            request.scene_id,
            request.algo_id
        );
        Ok(records)
    }

    fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let mut builder = self.client.post(url).json(body);
        if let Some(token) = &self.csrf_token {
            builder = builder.header("X-CSRFToken", token);
        }
        let response = builder.send().map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

impl LabelSink for SuperpixelClient {
    fn push(&self, batch: &UpdateBatch) -> Result<(), ApiError> {
        let response = self.post(&self.push_url, batch)?;
        let body = response.text().map_err(|source| ApiError::Decode {
            url: self.push_url.clone(),
            source,
        })?;
        debug!("Pushed {} assignment(s): {}", batch.len(), body);
        Ok(())
    }
}
