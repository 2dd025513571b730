use std::env;

use anyhow::Context;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Location of the inventory REST API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - INVENTORY_API_URL: base URL all endpoints hang off (default: "http://127.0.0.1:5000/api")
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = env::var("INVENTORY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let url = Url::parse(raw.trim())
            .with_context(|| format!("INVENTORY_API_URL is not a valid URL: {}", raw))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("INVENTORY_API_URL must use http or https, got {}", url.scheme());
        }

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
        })
    }
}
