use async_trait::async_trait;
use snafu::ensure;
use std::collections::HashMap;

use crate::error::{self, Error, Result};
use crate::photos::photodb::PhotoDb;
use crate::photos::{Photo, PhotoDefinition};
use crate::util::user_input::Validated;

#[derive(Default)]
pub struct HashMapPhotoDb {
    photos: HashMap<String, Photo>,
    // HashMap iteration order is arbitrary, the catalog keeps seed order
    insertion_order: Vec<String>,
}

#[async_trait]
impl PhotoDb for HashMapPhotoDb {
    async fn add(&mut self, photo: Validated<PhotoDefinition>) -> Result<()> {
        let photo = Photo::from(photo.user_input);

        ensure!(
            !self.photos.contains_key(&photo.name),
            error::DuplicatePhotoName {
                name: photo.name.clone()
            }
        );

        self.insertion_order.push(photo.name.clone());
        self.photos.insert(photo.name.clone(), photo);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Photo>> {
        Ok(self
            .insertion_order
            .iter()
            .filter_map(|name| self.photos.get(name))
            .cloned()
            .collect())
    }

    async fn photo(&self, name: &str) -> Result<Photo> {
        self.photos.get(name).cloned().ok_or(Error::PhotoNotFound)
    }
}
