use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::EntityId;

/// An entity kind exposed by the remote API.
pub trait Resource: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Write-model body accepted by `create` and `update`.
    type Payload: std::fmt::Debug + Send + Sync + 'static;

    /// Singular name used in logs ("vendor", "product").
    const KIND: &'static str;

    fn id(&self) -> &EntityId;
}

/// Port for the remote CRUD endpoints of one resource.
///
/// Each call is a single request: no retry, no caching, no timeout override.
#[async_trait]
pub trait Gateway<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, GatewayError>;
    async fn create(&self, payload: R::Payload) -> Result<R, GatewayError>;
    async fn update(&self, id: &EntityId, payload: R::Payload) -> Result<R, GatewayError>;
    async fn remove(&self, id: &EntityId) -> Result<(), GatewayError>;
}
