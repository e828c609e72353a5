use serde::{Deserialize, Serialize};

use crate::primitives::Coordinate2D;

/// A named point of interest within a photo. The position is given in the
/// original image's pixel space.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub name: String,
    pub position: Coordinate2D,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_nested_position() {
        let target = Target {
            name: "waldo".to_string(),
            position: Coordinate2D::new(474., 1546.),
        };

        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            serde_json::json!({
                "name": "waldo",
                "position": {"x": 474.0, "y": 1546.0}
            })
        );
    }
}
