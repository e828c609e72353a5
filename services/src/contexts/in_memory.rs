use async_trait::async_trait;
use tokio::sync::{RwLockReadGuard, RwLockWriteGuard};

use super::{Context, Db};
use crate::photos::HashMapPhotoDb;
use crate::sessions::HashMapSessionDb;

/// A context with references to in-memory versions of the individual stores.
#[derive(Clone, Default)]
pub struct InMemoryContext {
    photo_db: Db<HashMapPhotoDb>,
    session_db: Db<HashMapSessionDb>,
}

#[async_trait]
impl Context for InMemoryContext {
    type PhotoDb = HashMapPhotoDb;
    type SessionDb = HashMapSessionDb;

    fn photo_db(&self) -> Db<Self::PhotoDb> {
        self.photo_db.clone()
    }
    async fn photo_db_ref(&self) -> RwLockReadGuard<'_, Self::PhotoDb> {
        self.photo_db.read().await
    }
    async fn photo_db_ref_mut(&self) -> RwLockWriteGuard<'_, Self::PhotoDb> {
        self.photo_db.write().await
    }

    fn session_db(&self) -> Db<Self::SessionDb> {
        self.session_db.clone()
    }
    async fn session_db_ref(&self) -> RwLockReadGuard<'_, Self::SessionDb> {
        self.session_db.read().await
    }
    async fn session_db_ref_mut(&self) -> RwLockWriteGuard<'_, Self::SessionDb> {
        self.session_db.write().await
    }
}
