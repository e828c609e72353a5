use snafu::ResultExt;
use std::path::Path;

use crate::error::{self, Result};
use crate::photos::{PhotoDb, PhotoDefinition};
use crate::util::user_input::{UserInput, Validated};

/// Reads a seed file containing a JSON array of photo definitions and
/// validates every entry. The seed file is produced out-of-band; the running
/// system never mutates the catalog.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Validated<PhotoDefinition>>> {
    let bytes = tokio::fs::read(path).await.context(error::Io)?;
    let definitions: Vec<PhotoDefinition> = serde_json::from_slice(&bytes)?;

    definitions
        .into_iter()
        .map(UserInput::validated)
        .collect()
}

/// Inserts the given definitions into a photo store and returns how many
/// were added.
pub async fn seed_photo_db<D: PhotoDb>(
    photo_db: &mut D,
    definitions: Vec<Validated<PhotoDefinition>>,
) -> Result<usize> {
    let count = definitions.len();

    for definition in definitions {
        photo_db.add(definition).await?;
    }

    Ok(count)
}
