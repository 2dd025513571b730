use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::errors::GatewayError;
use business::domain::gateway::Gateway;
use business::domain::product::model::{Product, ProductPayload};
use business::domain::shared::value_objects::EntityId;

use crate::client::StoreApiClient;
use crate::dto::ProductDto;
use crate::response::{decode, send};

const COLLECTION: &str = "products";

/// `/products` endpoints; writes are `multipart/form-data` with an optional `image` part.
pub struct ProductGatewayHttp {
    client: StoreApiClient,
}

impl ProductGatewayHttp {
    pub fn new(client: StoreApiClient) -> Self {
        Self { client }
    }

    /// Text parts of the form, in wire order. Empty optional fields are left out.
    pub fn text_fields(payload: &ProductPayload) -> Vec<(&'static str, String)> {
        let mut fields = vec![("name", payload.name.clone())];
        if let Some(category) = &payload.category {
            fields.push(("category", category.clone()));
        }
        if let Some(cost_price) = &payload.cost_price {
            fields.push(("costPrice", cost_price.clone()));
        }
        fields.push(("sellingPrice", payload.selling_price.clone()));
        fields.push(("vendor", payload.vendor.to_string()));
        fields
    }

    fn multipart(payload: ProductPayload) -> Result<Form, GatewayError> {
        let mut form = Self::text_fields(&payload)
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value));

        if let Some(image) = payload.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| GatewayError::request(e.to_string()))?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl Gateway<Product> for ProductGatewayHttp {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let request = self.client.client.get(self.client.collection_url(COLLECTION)?);
        let products: Vec<ProductDto> = decode(send(request).await?).await?;

        Ok(products
            .into_iter()
            .map(|dto| dto.into_domain(&self.client))
            .collect())
    }

    async fn create(&self, payload: ProductPayload) -> Result<Product, GatewayError> {
        let request = self
            .client
            .client
            .post(self.client.collection_url(COLLECTION)?)
            .multipart(Self::multipart(payload)?);
        let product: ProductDto = decode(send(request).await?).await?;

        Ok(product.into_domain(&self.client))
    }

    async fn update(&self, id: &EntityId, payload: ProductPayload) -> Result<Product, GatewayError> {
        let request = self
            .client
            .client
            .put(self.client.item_url(COLLECTION, id)?)
            .multipart(Self::multipart(payload)?);
        let product: ProductDto = decode(send(request).await?).await?;

        Ok(product.into_domain(&self.client))
    }

    async fn remove(&self, id: &EntityId) -> Result<(), GatewayError> {
        let request = self.client.client.delete(self.client.item_url(COLLECTION, id)?);
        send(request).await?;

        Ok(())
    }
}
