use crate::domain::filter::Searchable;
use crate::domain::gateway::Resource;
use crate::domain::image::model::CompressedImage;
use crate::domain::shared::value_objects::EntityId;

use super::value_objects::VendorRef;

const UPLOAD_SEGMENT: &str = "/upload/";
const THUMBNAIL_SEGMENT: &str = "/upload/f_auto,q_auto,w_400,h_400,c_fill/";

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Free-text label. Not a quantity.
    pub category: Option<String>,
    pub cost_price: Option<f64>,
    pub selling_price: f64,
    /// `None` when the API dropped the reference (e.g. the vendor was deleted).
    pub vendor: Option<VendorRef>,
    /// Absolute URL, already resolved against the API base.
    pub image_url: Option<String>,
}

impl Product {
    /// URL of a 400x400 rendition for list display.
    ///
    /// Hosted uploads get the delivery transform spliced in; any other URL is returned as is.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.image_url.as_ref().map(|url| {
            if url.contains(UPLOAD_SEGMENT) {
                url.replacen(UPLOAD_SEGMENT, THUMBNAIL_SEGMENT, 1)
            } else {
                url.clone()
            }
        })
    }
}

/// Multipart body for `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub category: Option<String>,
    pub cost_price: Option<String>,
    pub selling_price: String,
    pub vendor: EntityId,
    pub image: Option<CompressedImage>,
}

impl Resource for Product {
    type Payload = ProductPayload;

    const KIND: &'static str = "product";

    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(category) = &self.category {
            fields.push(category.as_str());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_image(image_url: Option<&str>) -> Product {
        Product {
            id: EntityId::new("p1"),
            name: "Soap".to_string(),
            category: None,
            cost_price: None,
            selling_price: 10.0,
            vendor: None,
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn should_insert_transform_for_hosted_uploads() {
        let product = product_with_image(Some(
            "https://res.cloudinary.com/demo/image/upload/v1/soap.jpg",
        ));

        assert_eq!(
            product.thumbnail_url().as_deref(),
            Some("https://res.cloudinary.com/demo/image/upload/f_auto,q_auto,w_400,h_400,c_fill/v1/soap.jpg")
        );
    }

    #[test]
    fn should_keep_other_urls_unchanged() {
        let product = product_with_image(Some("http://localhost:5000/api/images/soap.jpg"));

        assert_eq!(
            product.thumbnail_url().as_deref(),
            Some("http://localhost:5000/api/images/soap.jpg")
        );
    }

    #[test]
    fn should_have_no_thumbnail_without_image() {
        assert!(product_with_image(None).thumbnail_url().is_none());
    }
}
