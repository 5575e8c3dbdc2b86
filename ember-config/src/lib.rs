use log::warn;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub mod inventory;
pub mod logging;

pub use inventory::InventoryConfig;
pub use logging::LoggingConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[cfg(not(feature = "test_helper"))]
static ADVANCED_CONFIG: std::sync::LazyLock<AdvancedConfiguration> =
    std::sync::LazyLock::new(|| {
        let exec_dir = std::env::current_dir()
            .unwrap_or_else(|err| panic!("Couldn't determine the working directory: {err}"));
        AdvancedConfiguration::load(&exec_dir)
    });

#[cfg(not(feature = "test_helper"))]
pub fn advanced_config() -> &'static AdvancedConfiguration {
    &ADVANCED_CONFIG
}

#[cfg(feature = "test_helper")]
use std::cell::RefCell;

// Leaks one config per override, only ever done in tests.
#[cfg(feature = "test_helper")]
thread_local! {
    // Thread local so parallel tests don't see each other's overrides
    static ADVANCED_CONFIG: RefCell<&'static AdvancedConfiguration> = RefCell::new(Box::leak(Box::new(AdvancedConfiguration::default())));
}

#[cfg(feature = "test_helper")]
pub fn override_config_for_testing(config: AdvancedConfiguration) {
    ADVANCED_CONFIG.with_borrow_mut(|ref_config| {
        *ref_config = Box::leak(Box::new(config));
    });
}

#[cfg(feature = "test_helper")]
pub fn advanced_config() -> &'static AdvancedConfiguration {
    ADVANCED_CONFIG.with_borrow(|config| *config)
}

/// Optional server features and limits, stored in `config/features.toml`.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
    pub inventory: InventoryConfig,
}

#[derive(Debug, Error)]
pub enum LoadConfigurationError {
    #[error("couldn't access {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("couldn't parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub trait LoadConfiguration {
    /// Loads the configuration from `<exec_dir>/config/`, writing the defaults
    /// there first if the file doesn't exist.
    fn load_from(exec_dir: &Path) -> Result<Self, LoadConfigurationError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir(&config_dir).map_err(|source| LoadConfigurationError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content =
                fs::read_to_string(&path).map_err(|source| LoadConfigurationError::Io {
                    path: path.clone(),
                    source,
                })?;

            toml::from_str(&file_content).map_err(|err| LoadConfigurationError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(&path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config: {err}"),
            }

            content
        };

        config.validate().map_err(LoadConfigurationError::Invalid)?;
        Ok(config)
    }

    /// Like [`LoadConfiguration::load_from`], but a broken configuration stops the server.
    fn load(exec_dir: &Path) -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        Self::load_from(exec_dir).unwrap_or_else(|err| {
            panic!("{err}. This is probably caused by a config update; just delete the old config and start the server again")
        })
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), String>;
}

impl LoadConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) -> Result<(), String> {
        self.inventory.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();

        let config = AdvancedConfiguration::load_from(dir.path()).unwrap();
        assert_eq!(config, AdvancedConfiguration::default());
        assert_eq!(config.inventory.max_transaction_actions, 512);
        assert!(!config.inventory.log_transactions);
        assert!(dir.path().join("config/features.toml").exists());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/features.toml"),
            "[inventory]\nlog_transactions = true\n\n[logging]\ncolor = false\n",
        )
        .unwrap();

        let config = AdvancedConfiguration::load_from(dir.path()).unwrap();
        assert!(config.inventory.log_transactions);
        assert_eq!(config.inventory.max_transaction_actions, 512);
        assert!(!config.logging.color);
        assert!(config.logging.enabled);
    }

    #[test]
    fn zero_action_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(
            dir.path().join("config/features.toml"),
            "[inventory]\nmax_transaction_actions = 0\n",
        )
        .unwrap();

        assert!(matches!(
            AdvancedConfiguration::load_from(dir.path()),
            Err(LoadConfigurationError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/features.toml"), "[inventory\n").unwrap();

        assert!(matches!(
            AdvancedConfiguration::load_from(dir.path()),
            Err(LoadConfigurationError::Parse { .. })
        ));
    }

    #[test]
    fn defaults_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let first = AdvancedConfiguration::load_from(dir.path()).unwrap();
        let second = AdvancedConfiguration::load_from(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
