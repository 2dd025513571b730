use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

/// Token for a locally held preview picture.
///
/// The bytes live in the [`PreviewRegistry`] until the handle is revoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewHandle {
    id: Uuid,
}

impl PreviewHandle {
    pub fn url(&self) -> String {
        format!("preview:{}", self.id)
    }
}

/// What the form shows as the product picture.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// A freshly selected, not yet uploaded picture.
    Local(PreviewHandle),
    /// The picture already stored on the server.
    Remote(String),
}

/// Holder of preview bytes keyed by handle.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    entries: Arc<Mutex<HashMap<Uuid, Arc<[u8]>>>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<Uuid, Arc<[u8]>>> {
        // Entries stay consistent even if a holder panicked mid-insert.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn register(&self, bytes: &[u8]) -> PreviewHandle {
        let id = Uuid::new_v4();
        self.entries().insert(id, Arc::from(bytes));
        PreviewHandle { id }
    }

    pub fn resolve(&self, handle: &PreviewHandle) -> Option<Arc<[u8]>> {
        self.entries().get(&handle.id).cloned()
    }

    /// Releases the bytes behind `handle`. Returns false if it was already revoked.
    pub fn revoke(&self, handle: &PreviewHandle) -> bool {
        self.entries().remove(&handle.id).is_some()
    }

    pub fn live_count(&self) -> usize {
        self.entries().len()
    }
}
