mod hashmap_photodb;
mod photo;
mod photodb;
pub mod seed;

pub use hashmap_photodb::HashMapPhotoDb;
pub use photo::{Photo, PhotoDefinition};
pub use photodb::PhotoDb;
