use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{self, Result};
use crate::primitives::Coordinate2D;

/// A square tolerance window centered on a point. A coordinate counts as
/// inside if it is strictly closer than `tolerance` to the center on both
/// axes, so a box with tolerance 15 covers a 30×30 px area and a click
/// exactly 15 px away misses.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct HitBox {
    center: Coordinate2D,
    tolerance: f64,
}

impl HitBox {
    /// Creates a new hit box around `center`
    ///
    /// # Errors
    ///
    /// This constructor fails if `tolerance` is not finite and positive
    ///
    pub fn new(center: Coordinate2D, tolerance: f64) -> Result<Self> {
        ensure!(
            tolerance.is_finite() && tolerance > 0.,
            error::InvalidHitBoxTolerance { tolerance }
        );
        Ok(Self { center, tolerance })
    }

    pub fn center(&self) -> Coordinate2D {
        self.center
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Checks whether the coordinate lies strictly inside the window
    ///
    /// # Examples
    ///
    /// ```
    /// use photohunt_datatypes::primitives::{Coordinate2D, HitBox};
    ///
    /// let hit_box = HitBox::new(Coordinate2D::new(100., 100.), 15.).unwrap();
    ///
    /// assert!(hit_box.contains(Coordinate2D::new(110., 90.)));
    /// assert!(!hit_box.contains(Coordinate2D::new(120., 100.)));
    /// ```
    ///
    pub fn contains(&self, coordinate: Coordinate2D) -> bool {
        coordinate.x > self.center.x - self.tolerance
            && coordinate.x < self.center.x + self.tolerance
            && coordinate.y > self.center.y - self.tolerance
            && coordinate.y < self.center.y + self.tolerance
    }
}
