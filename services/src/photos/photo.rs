use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::collections::HashSet;

use photohunt_datatypes::game::Target;
use photohunt_datatypes::primitives::ImageSize;

use crate::error::{self, Result};
use crate::util::user_input::UserInput;

/// A photo of the catalog. The `name` slug doubles as the key for the
/// on-disk image assets; `width` and `height` are the dimensions of the main
/// image, which clients use to rescale target coordinates to their rendered
/// image size.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub name: String,
    pub user_friendly_name: String,
    pub width: u32,
    pub height: u32,
    pub targets: Vec<Target>,
}

impl Photo {
    pub fn size(&self) -> ImageSize {
        ImageSize::from((self.width, self.height))
    }

    pub fn has_target(&self, name: &str) -> bool {
        self.targets.iter().any(|target| target.name == name)
    }
}

/// A photo as it appears in the seed file, before validation.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDefinition {
    pub name: String,
    pub user_friendly_name: String,
    pub width: u32,
    pub height: u32,
    pub targets: Vec<Target>,
}

impl UserInput for PhotoDefinition {
    fn validate(&self) -> Result<()> {
        ensure!(
            !self.name.is_empty()
                && self
                    .name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-'),
            error::InvalidPhotoDefinition {
                reason: "Photo name must be a non-empty slug of alphanumerics and dashes"
            }
        );

        ensure!(
            !self.user_friendly_name.is_empty(),
            error::InvalidPhotoDefinition {
                reason: "Display name must not be empty"
            }
        );

        ensure!(
            self.width > 0 && self.height > 0,
            error::InvalidPhotoDefinition {
                reason: "Image dimensions must be positive"
            }
        );

        ensure!(
            !self.targets.is_empty(),
            error::InvalidPhotoDefinition {
                reason: "A photo must have at least one target"
            }
        );

        let size = ImageSize::from((self.width, self.height));
        let mut seen = HashSet::new();
        for target in &self.targets {
            ensure!(
                seen.insert(target.name.as_str()),
                error::InvalidPhotoDefinition {
                    reason: "Target names must be unique within a photo"
                }
            );
            ensure!(
                size.contains(target.position),
                error::InvalidPhotoDefinition {
                    reason: "Target positions must lie within the image"
                }
            );
        }

        Ok(())
    }
}

impl From<PhotoDefinition> for Photo {
    fn from(definition: PhotoDefinition) -> Self {
        Self {
            name: definition.name,
            user_friendly_name: definition.user_friendly_name,
            width: definition.width,
            height: definition.height,
            targets: definition.targets,
        }
    }
}
