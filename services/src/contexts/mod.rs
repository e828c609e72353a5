use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::photos::PhotoDb;
use crate::sessions::SessionDb;

mod in_memory;

pub use in_memory::InMemoryContext;

pub type Db<T> = Arc<RwLock<T>>;

/// A context bundles access to the shared stores to pass to the service
/// handlers.
#[async_trait]
pub trait Context: 'static + Send + Sync + Clone {
    type PhotoDb: PhotoDb;
    type SessionDb: SessionDb;

    fn photo_db(&self) -> Db<Self::PhotoDb>;
    async fn photo_db_ref(&self) -> RwLockReadGuard<'_, Self::PhotoDb>;
    async fn photo_db_ref_mut(&self) -> RwLockWriteGuard<'_, Self::PhotoDb>;

    fn session_db(&self) -> Db<Self::SessionDb>;
    async fn session_db_ref(&self) -> RwLockReadGuard<'_, Self::SessionDb>;
    async fn session_db_ref_mut(&self) -> RwLockWriteGuard<'_, Self::SessionDb>;
}
