use std::sync::Arc;

use anyhow::Context;

use imaging::compressor::ImageCompressorJpeg;
use logger::TracingLogger;
use store_api::client::StoreApiClient;
use store_api::product_gateway::ProductGatewayHttp;
use store_api::vendor_gateway::VendorGatewayHttp;

use business::application::dashboard::Dashboard;
use business::application::form_session::FormSession;
use business::application::image_intake::ImageIntake;
use business::application::list_store::EntityListStore;
use business::domain::gateway::Gateway;
use business::domain::image::preview::PreviewRegistry;
use business::domain::logger::Logger;
use business::domain::product::form::ProductForm;
use business::domain::product::model::Product;
use business::domain::vendor::form::VendorForm;
use business::domain::vendor::model::Vendor;

use crate::config::app_config::AppConfig;

/// Shared adapters; every command builds its own stores and sessions from them.
pub struct DependencyContainer {
    pub logger: Arc<dyn Logger>,
    pub vendor_gateway: Arc<dyn Gateway<Vendor>>,
    pub product_gateway: Arc<dyn Gateway<Product>>,
    pub image_intake: Arc<ImageIntake>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let api_client = StoreApiClient::new(&config.api.base_url)
            .map_err(|e| anyhow::anyhow!(e.detail()))
            .context("Could not set up the inventory API client")?;
        let vendor_gateway: Arc<dyn Gateway<Vendor>> =
            Arc::new(VendorGatewayHttp::new(api_client.clone()));
        let product_gateway: Arc<dyn Gateway<Product>> =
            Arc::new(ProductGatewayHttp::new(api_client));

        let image_intake = Arc::new(ImageIntake::new(
            Arc::new(ImageCompressorJpeg),
            PreviewRegistry::new(),
            logger.clone(),
            config.image.compression_options(),
        ));

        let limits = image_intake.options();
        logger.debug(&format!(
            "Inventory API at {}, images limited to {} bytes and {} px",
            config.api.base_url, limits.max_size_bytes, limits.max_dimension
        ));

        Ok(Self {
            logger,
            vendor_gateway,
            product_gateway,
            image_intake,
        })
    }

    pub fn vendor_store(&self) -> EntityListStore<Vendor> {
        EntityListStore::new(self.vendor_gateway.clone(), self.logger.clone())
    }

    pub fn product_store(&self) -> EntityListStore<Product> {
        EntityListStore::new(self.product_gateway.clone(), self.logger.clone())
    }

    pub fn vendor_session(&self) -> FormSession<VendorForm> {
        FormSession::new(self.vendor_gateway.clone(), self.logger.clone())
    }

    pub fn product_session(&self) -> FormSession<ProductForm> {
        FormSession::new(self.product_gateway.clone(), self.logger.clone())
            .with_image_intake(self.image_intake.clone())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(
            self.vendor_gateway.clone(),
            self.product_gateway.clone(),
            self.logger.clone(),
        )
    }
}
