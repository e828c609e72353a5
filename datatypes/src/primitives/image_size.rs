use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;

use crate::error::{self, Result};
use crate::primitives::Coordinate2D;

/// The dimensions of an image in pixels. Since rendered images may have
/// fractional CSS pixel sizes, the dimensions are stored as floats.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct ImageSize {
    width: f64,
    height: f64,
}

impl ImageSize {
    /// Creates a new image size
    ///
    /// # Errors
    ///
    /// This constructor fails if either dimension is not finite and positive
    ///
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0. && height > 0.,
            error::InvalidImageSize { width, height }
        );
        Ok(Self { width, height })
    }

    /// Creates a new image size without checking the dimensions
    pub fn new_unchecked(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Maps a position in this image's pixel space to the corresponding
    /// position in `displayed` pixel space. Each axis is scaled
    /// independently by `displayed / original`.
    ///
    /// # Examples
    ///
    /// ```
    /// use photohunt_datatypes::primitives::{Coordinate2D, ImageSize};
    ///
    /// let original = ImageSize::new(3000., 2000.).unwrap();
    /// let displayed = ImageSize::new(1500., 500.).unwrap();
    ///
    /// assert_eq!(
    ///     original.map_position(displayed, Coordinate2D::new(750., 1000.)),
    ///     Coordinate2D::new(375., 250.)
    /// );
    /// ```
    ///
    pub fn map_position(&self, displayed: ImageSize, position: Coordinate2D) -> Coordinate2D {
        Coordinate2D::new(
            position.x / self.width * displayed.width,
            position.y / self.height * displayed.height,
        )
    }

    /// Whether the position lies within `[0, width] × [0, height]`
    pub fn contains(&self, position: Coordinate2D) -> bool {
        position.x >= 0. && position.x <= self.width && position.y >= 0. && position.y <= self.height
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from(tuple: (u32, u32)) -> Self {
        let (width, height) = tuple;
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn rejects_degenerate_sizes() {
        assert!(ImageSize::new(0., 100.).is_err());
        assert!(ImageSize::new(100., -1.).is_err());
        assert!(ImageSize::new(f64::NAN, 100.).is_err());
    }

    #[test]
    fn maps_positions_per_axis() {
        let original = ImageSize::new(3000., 2000.).unwrap();
        let displayed = ImageSize::new(1000., 1000.).unwrap();

        let mapped = original.map_position(displayed, Coordinate2D::new(474., 1546.));

        assert!(approx_eq!(f64, mapped.x, 158.));
        assert!(approx_eq!(f64, mapped.y, 773.));
    }

    #[test]
    fn contains_is_inclusive_of_the_border() {
        let size = ImageSize::new(10., 10.).unwrap();

        assert!(size.contains(Coordinate2D::new(0., 0.)));
        assert!(size.contains(Coordinate2D::new(10., 10.)));
        assert!(!size.contains(Coordinate2D::new(10.1, 5.)));
        assert!(!size.contains(Coordinate2D::new(5., -0.1)));
    }
}
