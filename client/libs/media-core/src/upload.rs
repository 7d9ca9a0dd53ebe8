//! Upload helper for the remote object-storage endpoint

use reqwest::Client;
use tracing::{debug, info};
use uuid::Uuid;

use error_types::{ClientError, Result};

use crate::media::{content_type, extension, to_data_uri, validate};

/// Object-storage endpoint configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub endpoint: String,
    pub bucket: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("UPLIFT_STORAGE_URL")
                .unwrap_or_else(|_| "http://localhost:9000".to_string()),
            bucket: std::env::var("UPLIFT_STORAGE_BUCKET")
                .unwrap_or_else(|_| "uplift-media".to_string()),
        }
    }

    /// Public URL of a stored object
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), key)
    }
}

/// Uploads validated media as base64 data URIs
#[derive(Clone)]
pub struct MediaUploader {
    client: Client,
    config: StorageConfig,
}

impl MediaUploader {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Validate, encode, and store a file; returns the public object URL
    ///
    /// One PUT per call. There is no multi-part, resume, or retry; a
    /// failed upload is reported to the caller who may try again.
    pub async fn upload(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let kind = validate(file_name, bytes.len())?;
        let key = self.object_key(file_name)?;
        let mime = content_type(file_name)?;
        let body = to_data_uri(file_name, bytes)?;

        debug!(%key, ?kind, size = bytes.len(), "uploading media object");

        let url = self.config.public_url(&key);
        let response = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, mime.to_string())
            .body(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("upload failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        info!(%key, "media object stored");
        Ok(url)
    }

    /// Object key: `{bucket}/{uuid}.{extension}`
    fn object_key(&self, file_name: &str) -> Result<String> {
        let ext = extension(file_name)?;
        Ok(format!("{}/{}.{}", self.config.bucket, Uuid::new_v4(), ext))
    }
}
