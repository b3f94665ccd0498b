use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use notipanel_core::config::PanelConfig;

/// Reasons the panel settings could not be loaded. Any of these makes `main`
/// start with [`PanelConfig::default`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No home directory could be resolved for this user, so there is no
    /// place to look for `config.toml`.
    #[error("no configuration directory for the current user")]
    DirectoriesNotFound,
    /// Reading `config.toml`, creating its directory or writing the default
    /// file failed.
    #[error("config file I/O failed: {0}")]
    IoError(#[from] std::io::Error),
    /// `config.toml` is not valid TOML or holds a value of the wrong type,
    /// such as an unknown `default_filter`.
    #[error("invalid panel config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// The default settings could not be rendered as TOML when writing the
    /// initial file.
    #[error("could not render default panel config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn config_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "notipanel", "notipanel") {
        Some(dirs) => Ok(dirs.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the panel configuration from the user's configuration directory.
pub fn load_config() -> Result<PanelConfig, ConfigError> {
    load_config_from(&config_path()?)
}

/// Loads the configuration at `path`, writing a default file first if there
/// is none.
pub fn load_config_from(path: &Path) -> Result<PanelConfig, ConfigError> {
    log::info!("Loading configuration from {path:?}");
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        return Ok(toml::from_str(&contents)?);
    }

    let config = PanelConfig::default();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use notipanel_core::NotificationFilter;

    use super::*;

    #[test]
    fn missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert_eq!(config, PanelConfig::default());
        assert!(path.exists());

        let reloaded = load_config_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn existing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "title = \"Inbox\"\ndefault_filter = \"read\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.title, "Inbox");
        assert_eq!(config.default_filter, NotificationFilter::Read);
        assert_eq!(config.panel_width, PanelConfig::default().panel_width);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "open_on_start = \"maybe\"").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::DeserializeError(_)));
        assert!(err.to_string().starts_with("invalid panel config: "));
    }

    #[test]
    fn unknown_default_filter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_filter = \"starred\"").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::DeserializeError(_))
        ));
        assert_eq!(
            ConfigError::DirectoriesNotFound.to_string(),
            "no configuration directory for the current user"
        );
    }
}
