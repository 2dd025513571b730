use crate::domain::form::model::EntityForm;
use crate::domain::image::model::CompressedImage;
use crate::domain::shared::value_objects::EntityId;

use super::model::{Product, ProductPayload};

/// Editable fields of the product form, kept as typed text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub cost_price: String,
    pub selling_price: String,
    /// Bare vendor id; never an embedded vendor.
    pub vendor: String,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EntityForm for ProductForm {
    type Entity = Product;

    fn from_entity(entity: &Product) -> Self {
        Self {
            name: entity.name.clone(),
            category: entity.category.clone().unwrap_or_default(),
            cost_price: entity
                .cost_price
                .map(|cost| cost.to_string())
                .unwrap_or_default(),
            selling_price: entity.selling_price.to_string(),
            vendor: entity
                .vendor
                .as_ref()
                .map(|vendor| vendor.id().to_string())
                .unwrap_or_default(),
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("sellingPrice", &self.selling_price),
            ("vendor", &self.vendor),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    fn to_payload(&self, image: Option<CompressedImage>) -> ProductPayload {
        ProductPayload {
            name: self.name.trim().to_string(),
            category: non_empty(&self.category),
            cost_price: non_empty(&self.cost_price),
            selling_price: self.selling_price.trim().to_string(),
            vendor: EntityId::new(self.vendor.trim()),
            image,
        }
    }

    fn remote_preview(entity: &Product) -> Option<String> {
        entity.image_url.clone()
    }
}
