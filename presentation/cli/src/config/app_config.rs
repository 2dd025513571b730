use super::{api_config::ApiConfig, image_config::ImageConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub image: ImageConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            image: ImageConfig::from_env()?,
        })
    }
}
