use crate::domain::shared::value_objects::EntityId;
use crate::domain::vendor::model::Vendor;

/// Vendor a product belongs to, as delivered by the API.
///
/// Some endpoints populate the vendor document, others only send its id.
/// The embedded form is read-only convenience: writes always use [`VendorRef::id`].
#[derive(Debug, Clone, PartialEq)]
pub enum VendorRef {
    Id(EntityId),
    Embedded(Vendor),
}

impl VendorRef {
    pub fn id(&self) -> &EntityId {
        match self {
            VendorRef::Id(id) => id,
            VendorRef::Embedded(vendor) => &vendor.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            VendorRef::Id(_) => None,
            VendorRef::Embedded(vendor) => Some(vendor.name.as_str()),
        }
    }
}

impl From<EntityId> for VendorRef {
    fn from(id: EntityId) -> Self {
        VendorRef::Id(id)
    }
}

impl From<Vendor> for VendorRef {
    fn from(vendor: Vendor) -> Self {
        VendorRef::Embedded(vendor)
    }
}
