use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::gateway::Gateway;
use business::domain::shared::value_objects::EntityId;
use business::domain::vendor::model::{Vendor, VendorPayload};

use crate::client::StoreApiClient;
use crate::dto::{VendorBody, VendorDto};
use crate::response::{decode, send};

const COLLECTION: &str = "vendors";

/// `/vendors` endpoints; bodies are JSON `{ "name": ... }`.
pub struct VendorGatewayHttp {
    client: StoreApiClient,
}

impl VendorGatewayHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Gateway<Vendor> for VendorGatewayHttp {
    async fn list(&self) -> Result<Vec<Vendor>, GatewayError> {
        let request = self.client.client.get(self.client.collection_url(COLLECTION)?);
        let vendors: Vec<VendorDto> = decode(send(request).await?).await?;

        Ok(vendors.into_iter().map(Vendor::from).collect())
    }

    async fn create(&self, payload: VendorPayload) -> Result<Vendor, GatewayError> {
        let request = self
            .client
            .client
            .post(self.client.collection_url(COLLECTION)?)
            .json(&VendorBody {
                name: &payload.name,
            });
        let vendor: VendorDto = decode(send(request).await?).await?;

        Ok(vendor.into())
    }

    async fn update(&self, id: &EntityId, payload: VendorPayload) -> Result<Vendor, GatewayError> {
        let request = self
            .client
            .client
            .put(self.client.item_url(COLLECTION, id)?)
            .json(&VendorBody {
                name: &payload.name,
            });
        let vendor: VendorDto = decode(send(request).await?).await?;

        Ok(vendor.into())
    }

    async fn remove(&self, id: &EntityId) -> Result<(), GatewayError> {
        let request = self.client.client.delete(self.client.item_url(COLLECTION, id)?);
        send(request).await?;

        Ok(())
    }
}
