use business::domain::errors::GatewayError;
use business::domain::shared::value_objects::EntityId;
use reqwest::{Client, Url};

/// Shared HTTP client configuration for the inventory REST API.
#[derive(Clone)]
pub struct StoreApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl StoreApiClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| GatewayError::request(format!("invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::request(format!(
                "base URL {} cannot hold a path",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("inventory-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Returns the URL of a collection, e.g. `{base}/vendors`.
    pub fn collection_url(&self, collection: &str) -> Result<Url, GatewayError> {
        self.url_with(&[collection])
    }

    /// Returns the URL of one item, e.g. `{base}/vendors/{id}`.
    ///
    /// The id is a single escaped path segment, so `/`, `?`, `#` and dot
    /// segments can never address another resource.
    pub fn item_url(&self, collection: &str, id: &EntityId) -> Result<Url, GatewayError> {
        if id.is_blank() || matches!(id.as_str(), "." | "..") {
            return Err(GatewayError::request(format!("invalid id '{}'", id)));
        }
        self.url_with(&[collection, id.as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::request(format!("base URL {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Makes a server-provided image path absolute.
    ///
    /// Anything starting with `http` is already absolute and kept verbatim.
    pub fn resolve_asset_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.as_str().trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}
