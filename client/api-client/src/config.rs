use serde::{Deserialize, Serialize};

/// Backend endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("UPLIFT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            api_key: std::env::var("UPLIFT_API_KEY").unwrap_or_default(),
        }
    }
}
