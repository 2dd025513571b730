use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::VendorRef;
use business::domain::shared::value_objects::EntityId;
use business::domain::vendor::model::Vendor;

use crate::client::StoreApiClient;

#[derive(Debug, Deserialize)]
pub struct VendorDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<VendorDto> for Vendor {
    fn from(dto: VendorDto) -> Self {
        Vendor::new(dto.id, dto.name)
    }
}

/// `vendor` as sent by the API: either populated or just the id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VendorRefDto {
    Id(String),
    Embedded(VendorDto),
}

impl From<VendorRefDto> for VendorRef {
    fn from(dto: VendorRefDto) -> Self {
        match dto {
            VendorRefDto::Id(id) => VendorRef::Id(EntityId::new(id)),
            VendorRefDto::Embedded(vendor) => VendorRef::Embedded(vendor.into()),
        }
    }
}

/// Price that may arrive as a JSON number or as the string typed into a form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumericDto {
    Number(f64),
    Text(String),
}

impl NumericDto {
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            NumericDto::Number(n) => Some(*n),
            NumericDto::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub cost_price: Option<NumericDto>,
    #[serde(default)]
    pub selling_price: Option<NumericDto>,
    #[serde(default)]
    pub vendor: Option<VendorRefDto>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProductDto {
    /// Converts to the domain model, resolving the image path against the API base.
    pub fn into_domain(self, api: &StoreApiClient) -> Product {
        Product {
            id: EntityId::new(self.id),
            name: self.name,
            category: non_blank(self.category),
            cost_price: self.cost_price.as_ref().and_then(NumericDto::value),
            selling_price: self
                .selling_price
                .as_ref()
                .and_then(NumericDto::value)
                .unwrap_or(0.0),
            vendor: self.vendor.map(VendorRef::from),
            image_url: non_blank(self.image_url).map(|path| api.resolve_asset_url(&path)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VendorBody<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> StoreApiClient {
        StoreApiClient::new("http://localhost:5000/api").unwrap()
    }

    #[test]
    fn should_read_mongo_style_vendor_ids() {
        let vendors: Vec<VendorDto> =
            serde_json::from_str(r#"[{"_id":"v1","name":"Acme","__v":0},{"id":"v2","name":"Globex"}]"#)
                .unwrap();

        let vendors: Vec<Vendor> = vendors.into_iter().map(Vendor::from).collect();

        assert_eq!(vendors, vec![Vendor::new("v1", "Acme"), Vendor::new("v2", "Globex")]);
    }

    #[test]
    fn should_accept_embedded_and_bare_vendor_references() {
        let products: Vec<ProductDto> = serde_json::from_str(
            r#"[
                {"_id":"p1","name":"Soap","sellingPrice":20,"vendor":{"_id":"v1","name":"Acme"}},
                {"_id":"p2","name":"Rice","sellingPrice":55,"vendor":"v2"}
            ]"#,
        )
        .unwrap();

        let products: Vec<Product> = products.into_iter().map(|p| p.into_domain(&api())).collect();

        assert_eq!(products[0].vendor, Some(VendorRef::Embedded(Vendor::new("v1", "Acme"))));
        assert_eq!(products[1].vendor, Some(VendorRef::Id(EntityId::new("v2"))));
    }

    #[test]
    fn should_parse_prices_sent_as_strings() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"_id":"p1","name":"Tea","costPrice":"12.5","sellingPrice":"20","vendor":"v1"}"#,
        )
        .unwrap();

        let product = dto.into_domain(&api());

        assert_eq!(product.cost_price, Some(12.5));
        assert_eq!(product.selling_price, 20.0);
    }

    #[test]
    fn should_default_unreadable_prices() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"_id":"p1","name":"Tea","costPrice":"","sellingPrice":"n/a","vendor":null}"#,
        )
        .unwrap();

        let product = dto.into_domain(&api());

        assert_eq!(product.cost_price, None);
        assert_eq!(product.selling_price, 0.0);
        assert_eq!(product.vendor, None);
    }

    #[test]
    fn should_resolve_relative_image_url_and_drop_blank_fields() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"_id":"p1","name":"Tea","category":"","sellingPrice":5,"vendor":"v1","imageUrl":"uploads/tea.jpg"}"#,
        )
        .unwrap();

        let product = dto.into_domain(&api());

        assert_eq!(product.category, None);
        assert_eq!(
            product.image_url.as_deref(),
            Some("http://localhost:5000/api/uploads/tea.jpg")
        );
    }
}
