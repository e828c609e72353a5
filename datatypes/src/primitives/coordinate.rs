use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in pixel space, e.g. a target position or a click location.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, PartialOrd, Serialize)]
pub struct Coordinate2D {
    pub x: f64,
    pub y: f64,
}

impl Coordinate2D {
    /// Creates a new coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use photohunt_datatypes::primitives::Coordinate2D;
    ///
    /// let c = Coordinate2D::new(474., 1546.);
    ///
    /// assert_eq!(c.x, 474.);
    /// assert_eq!(c.y, 1546.);
    /// ```
    ///
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coordinate2D {
    /// # Examples
    ///
    /// ```
    /// use photohunt_datatypes::primitives::Coordinate2D;
    ///
    /// let c: Coordinate2D = (5.1, -3.0).into();
    ///
    /// assert_eq!(c.x, 5.1);
    /// assert_eq!(c.y, -3.0);
    /// ```
    ///
    fn from(tuple: (f64, f64)) -> Self {
        let (x, y) = tuple;
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_xy_object() {
        let c = Coordinate2D::new(2140., 1393.);

        assert_eq!(
            serde_json::to_value(c).unwrap(),
            serde_json::json!({"x": 2140.0, "y": 1393.0})
        );
    }

    #[test]
    fn deserializes_from_xy_object() {
        let c: Coordinate2D = serde_json::from_str(r#"{"x": 1.5, "y": 2.5}"#).unwrap();

        assert_eq!(c, Coordinate2D::new(1.5, 2.5));
    }
}
