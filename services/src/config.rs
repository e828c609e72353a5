use config::{Config, Environment, File};
use serde::Deserialize;
use snafu::ResultExt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{LazyLock, RwLock};

use crate::error::{self, Result};

static SETTINGS: LazyLock<RwLock<Config>> = LazyLock::new(init_settings);

fn init_settings() -> RwLock<Config> {
    let mut settings = Config::builder();

    let dir: PathBuf = retrieve_settings_dir().expect("settings directory should exist");

    #[cfg(test)]
    let files = ["Settings-default.toml", "Settings-test.toml"];

    #[cfg(not(test))]
    let files = ["Settings-default.toml", "Settings.toml"];

    let files: Vec<File<_, _>> = files
        .iter()
        .map(|f| dir.join(f))
        .filter(|p| p.exists())
        .map(File::from)
        .collect();

    settings = settings.add_source(files);

    // Override config with environment variables that start with `PHOTOHUNT__`,
    // e.g. `PHOTOHUNT__LOGGING__LOG_SPEC=debug`.
    // Since variables contain underscores, groups are separated by double
    // underscores `__`.
    settings = settings.add_source(Environment::with_prefix("photohunt").separator("__"));

    RwLock::new(
        settings
            .build()
            .expect("it should crash the program if this fails"),
    )
}

/// tests may run in a workspace member directory
#[cfg(test)]
fn retrieve_settings_dir() -> Result<PathBuf> {
    use crate::error::Error;

    const MAX_PARENT_DIRS: usize = 1;

    let mut settings_dir = std::env::current_dir().context(error::MissingWorkingDirectory)?;

    for _ in 0..=MAX_PARENT_DIRS {
        if settings_dir.join("Settings-default.toml").exists() {
            return Ok(settings_dir);
        }

        // go to parent directory
        if !settings_dir.pop() {
            break;
        }
    }

    Err(Error::MissingSettingsDirectory)
}

#[cfg(not(test))]
fn retrieve_settings_dir() -> Result<PathBuf> {
    std::env::current_dir().context(error::MissingWorkingDirectory)
}

#[cfg(test)]
pub fn set_config<T>(key: &str, value: T) -> Result<()>
where
    T: Into<config::Value>,
{
    let mut settings = SETTINGS
        .write()
        .map_err(|_error| error::Error::ConfigLockFailed)?;

    let builder = Config::builder()
        .add_source(settings.clone())
        .set_override(key, value)
        .context(error::Config)?;

    *settings = builder.build().context(error::Config)?;
    Ok(())
}

pub fn get_config<'a, T>(key: &str) -> Result<T>
where
    T: Deserialize<'a>,
{
    SETTINGS
        .read()
        .map_err(|_error| error::Error::ConfigLockFailed)?
        .get::<T>(key)
        .context(error::Config)
}

pub fn get_config_element<'a, T>() -> Result<T>
where
    T: ConfigElement + Deserialize<'a>,
{
    get_config(T::KEY)
}

pub trait ConfigElement {
    const KEY: &'static str;
}

#[derive(Debug, Deserialize)]
pub struct Web {
    pub bind_address: SocketAddr,
    /// Origin of the separately hosted frontend. When unset, any origin is
    /// allowed (development mode).
    pub allowed_origin: Option<String>,
}

impl ConfigElement for Web {
    const KEY: &'static str = "web";
}

#[derive(Debug, Deserialize)]
pub struct Photos {
    /// Directory holding one subdirectory per photo with `main.jpg`,
    /// `preview.jpg` and `targets/{name}.png`.
    pub images_path: PathBuf,
    /// JSON file with the photo catalog, loaded at startup.
    pub seed_file: Option<PathBuf>,
}

impl ConfigElement for Photos {
    const KEY: &'static str = "photos";
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    pub log_spec: String,
}

impl ConfigElement for Logging {
    const KEY: &'static str = "logging";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn loads_the_default_settings() {
        let web: Web = get_config_element().unwrap();

        assert!(web.bind_address.port() > 0);
    }

    #[test]
    #[serial]
    fn overrides_a_config_value() {
        set_config("photos.images_path", "/tmp/photohunt-images").unwrap();

        let photos: Photos = get_config_element().unwrap();

        assert_eq!(
            photos.images_path,
            PathBuf::from("/tmp/photohunt-images")
        );
    }
}
