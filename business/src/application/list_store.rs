use std::sync::Arc;

use crate::domain::errors::GatewayError;
use crate::domain::filter::{Searchable, filter};
use crate::domain::gateway::{Gateway, Resource};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::EntityId;

/// View-scoped copy of one resource list plus its loading/error status.
///
/// The list is only ever replaced wholesale from the server; it is never patched locally.
pub struct EntityListStore<R: Resource> {
    gateway: Arc<dyn Gateway<R>>,
    logger: Arc<dyn Logger>,
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
}

impl<R: Resource> EntityListStore<R> {
    pub fn new(gateway: Arc<dyn Gateway<R>>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    /// True only while `refresh` is suspended on the gateway call.
    ///
    /// `refresh` holds `&mut self` throughout, so this is only observable by a
    /// host that shares the store and polls it concurrently, never by the caller.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error code of the last failed operation, cleared by the next refresh.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &EntityId) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Re-fetches the whole list. On failure the previous items are kept.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        self.loading = true;
        self.error = None;
        self.logger.debug(&format!("Fetching {} list", R::KIND));

        let result = self.gateway.list().await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.logger
                    .info(&format!("Loaded {} {} entries", items.len(), R::KIND));
                self.items = items;
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to fetch {} list: {}",
                    R::KIND,
                    e.detail()
                ));
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Deletes an entity on the server, then re-fetches the list.
    pub async fn remove(&mut self, id: &EntityId) -> Result<(), GatewayError> {
        self.logger.info(&format!("Deleting {}: {}", R::KIND, id));

        if let Err(e) = self.gateway.remove(id).await {
            self.logger.error(&format!(
                "Failed to delete {} {}: {}",
                R::KIND,
                id,
                e.detail()
            ));
            self.error = Some(e.to_string());
            return Err(e);
        }

        self.refresh().await
    }
}

impl<R: Resource + Searchable> EntityListStore<R> {
    /// Current items narrowed by `query`; recomputed on every call.
    pub fn filtered(&self, query: &str) -> Vec<&R> {
        filter(&self.items, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vendor::model::{Vendor, VendorPayload};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub VendorGateway {}

        #[async_trait]
        impl Gateway<Vendor> for VendorGateway {
            async fn list(&self) -> Result<Vec<Vendor>, GatewayError>;
            async fn create(&self, payload: VendorPayload) -> Result<Vendor, GatewayError>;
            async fn update(&self, id: &EntityId, payload: VendorPayload) -> Result<Vendor, GatewayError>;
            async fn remove(&self, id: &EntityId) -> Result<(), GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn acme() -> Vendor {
        Vendor::new("v1", "Acme")
    }

    #[tokio::test]
    async fn should_replace_items_when_refresh_succeeds() {
        let mut gateway = MockVendorGateway::new();
        gateway
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![acme(), Vendor::new("v2", "Globex")]));

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        let result = store.refresh().await;

        assert!(result.is_ok());
        assert_eq!(store.items().len(), 2);
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn should_keep_previous_items_when_refresh_fails() {
        let mut gateway = MockVendorGateway::new();
        let mut calls = 0;
        gateway.expect_list().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![acme()])
            } else {
                Err(GatewayError::status(503, "Service Unavailable"))
            }
        });

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        store.refresh().await.unwrap();
        let result = store.refresh().await;

        assert!(matches!(result, Err(GatewayError::Status { status: 503, .. })));
        assert_eq!(store.items(), &[acme()]);
        assert_eq!(store.error(), Some("gateway.status"));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn should_yield_same_items_when_refreshed_twice() {
        let mut gateway = MockVendorGateway::new();
        gateway
            .expect_list()
            .times(2)
            .returning(|| Ok(vec![acme(), Vendor::new("v2", "Globex")]));

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        store.refresh().await.unwrap();
        let first = store.items().to_vec();
        store.refresh().await.unwrap();

        assert_eq!(store.items(), first.as_slice());
    }

    #[tokio::test]
    async fn should_clear_error_on_next_successful_refresh() {
        let mut gateway = MockVendorGateway::new();
        let mut calls = 0;
        gateway.expect_list().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(GatewayError::network("connection refused"))
            } else {
                Ok(vec![acme()])
            }
        });

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        let _ = store.refresh().await;
        assert_eq!(store.error(), Some("gateway.network"));

        store.refresh().await.unwrap();
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn should_refetch_after_remove() {
        let mut gateway = MockVendorGateway::new();
        gateway
            .expect_remove()
            .with(eq(EntityId::new("v2")))
            .times(1)
            .returning(|_| Ok(()));
        gateway.expect_list().times(1).returning(|| Ok(vec![acme()]));

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        let result = store.remove(&EntityId::new("v2")).await;

        assert!(result.is_ok());
        assert_eq!(store.items(), &[acme()]);
    }

    #[tokio::test]
    async fn should_not_refetch_when_remove_fails() {
        let mut gateway = MockVendorGateway::new();
        gateway
            .expect_remove()
            .returning(|_| Err(GatewayError::status(404, "Not Found")));
        gateway.expect_list().never();

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        let result = store.remove(&EntityId::new("missing")).await;

        assert!(result.is_err());
        assert_eq!(store.error(), Some("gateway.status"));
    }

    #[tokio::test]
    async fn should_filter_current_items_without_fetching() {
        let mut gateway = MockVendorGateway::new();
        gateway
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![acme(), Vendor::new("v2", "Globex")]));

        let mut store = EntityListStore::new(Arc::new(gateway), mock_logger());
        store.refresh().await.unwrap();

        assert_eq!(store.filtered("glo").len(), 1);
        assert_eq!(store.filtered("").len(), 2);
        assert_eq!(store.find(&EntityId::new("v2")).map(|v| v.name.as_str()), Some("Globex"));
    }
}
