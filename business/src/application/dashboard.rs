use std::sync::Arc;

use crate::application::list_store::EntityListStore;
use crate::domain::gateway::Gateway;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::vendor::model::Vendor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub vendor_count: usize,
    pub product_count: usize,
}

/// Overview of both resources with its own, unshared stores.
pub struct Dashboard {
    pub vendors: EntityListStore<Vendor>,
    pub products: EntityListStore<Product>,
    logger: Arc<dyn Logger>,
}

impl Dashboard {
    pub fn new(
        vendor_gateway: Arc<dyn Gateway<Vendor>>,
        product_gateway: Arc<dyn Gateway<Product>>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            vendors: EntityListStore::new(vendor_gateway, logger.clone()),
            products: EntityListStore::new(product_gateway, logger.clone()),
            logger,
        }
    }

    /// Fetches vendors and products concurrently; each failure only affects its own store.
    pub async fn mount(&mut self) {
        let (vendors, products) = tokio::join!(self.vendors.refresh(), self.products.refresh());

        if vendors.is_err() || products.is_err() {
            self.logger.warn("Dashboard loaded with missing data");
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            vendor_count: self.vendors.items().len(),
            product_count: self.products.items().len(),
        }
    }

    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        self.products.filtered(query)
    }
}
