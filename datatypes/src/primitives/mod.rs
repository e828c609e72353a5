mod coordinate;
mod hit_box;
mod image_size;

pub use coordinate::Coordinate2D;
pub use hit_box::HitBox;
pub use image_size::ImageSize;
