use async_trait::async_trait;

use crate::error::Result;
use crate::photos::{Photo, PhotoDefinition};
use crate::util::user_input::Validated;

#[async_trait]
pub trait PhotoDb: Send + Sync {
    /// Adds a photo to the catalog
    ///
    /// # Errors
    ///
    /// This call fails if a photo with the same name already exists.
    ///
    async fn add(&mut self, photo: Validated<PhotoDefinition>) -> Result<()>;

    /// All photos of the catalog, in insertion order
    async fn list(&self) -> Result<Vec<Photo>>;

    /// Loads one photo by its name
    ///
    /// # Errors
    ///
    /// This call fails if no photo with the given name exists.
    ///
    async fn photo(&self, name: &str) -> Result<Photo>;
}
