use crate::domain::gateway::Resource;
use crate::domain::image::model::CompressedImage;

/// Field state of a create/edit form for one resource.
///
/// Values are held as the user typed them; conversion to the write model
/// happens only in `to_payload`, after `missing_fields` came back empty.
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    type Entity: Resource;

    /// Populates the form from a read-model entity.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Names of required fields that are blank, in form order.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Builds the write-model body, leaving empty optional fields out.
    fn to_payload(
        &self,
        image: Option<CompressedImage>,
    ) -> <Self::Entity as Resource>::Payload;

    /// Already-uploaded picture to show while editing, if any.
    fn remote_preview(_entity: &Self::Entity) -> Option<String> {
        None
    }
}
