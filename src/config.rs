// config.rs

//! User configuration, read from a YAML file in the user config directory.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use thiserror::Error;

const FILE_NAME: &str = "config.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "lightpush-chat";

const DEFAULT_NICK: &str = "anonymous";
const DEFAULT_CONTENT_TOPIC: &str = "/toy-chat/2/huilong/proto";
const DEFAULT_INITIAL_PEERS: usize = 2;
const DEFAULT_PEER_DISCOVERY_DELAY_MS: u64 = 1500;
const DEFAULT_LOG_LEVEL: &str = "debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no $HOME directory found for the config")]
    NoHomeDir,
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("nick must not be blank")]
    BlankNick,
    #[error("invalid content topic {0:?}, expected /{{app}}/{{version}}/{{topic}}/{{encoding}}")]
    InvalidContentTopic(String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub nick: String,
    pub content_topic: String,
    /// Light push peers reported once peer discovery completes.
    pub initial_peers: usize,
    pub peer_discovery_delay_ms: u64,
    pub log_level: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            nick: DEFAULT_NICK.to_string(),
            content_topic: DEFAULT_CONTENT_TOPIC.to_string(),
            initial_peers: DEFAULT_INITIAL_PEERS,
            peer_discovery_delay_ms: DEFAULT_PEER_DISCOVERY_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Returns `~/.config/lightpush-chat/config.yml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(CONFIG_DIR).join(APP_CONFIG_DIR).join(FILE_NAME))
}

impl ChatConfig {
    /// Reads the config at `path`, or writes a default one there if it does not exist.
    ///
    /// The result is not validated, command line overrides may still fix it.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config_string = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&config_string)?)
        } else {
            let config = ChatConfig::default();
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let content_yml = serde_yaml::to_string(&config)?;
            let mut new_config = fs::File::create(path)?;
            write!(new_config, "{}", content_yml)?;
            Ok(config)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nick.trim().is_empty() {
            return Err(ConfigError::BlankNick);
        }
        validate_content_topic(&self.content_topic)?;
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn peer_discovery_delay(&self) -> Duration {
        Duration::from_millis(self.peer_discovery_delay_ms)
    }
}

// Topics look like /{app}/{version}/{topic}/{encoding}
fn validate_content_topic(topic: &str) -> Result<(), ConfigError> {
    let parts = topic.split('/').collect::<Vec<_>>();
    match parts.as_slice() {
        ["", app, version, name, encoding]
            if [app, version, name, encoding].iter().all(|p| !p.is_empty()) =>
        {
            Ok(())
        }
        _ => Err(ConfigError::InvalidContentTopic(topic.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = ChatConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.peer_discovery_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn creates_default_config_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(FILE_NAME);

        let config = ChatConfig::load_or_create(&path).unwrap();
        assert_eq!(config, ChatConfig::default());
        assert!(path.exists());

        // and reads it back
        let reloaded = ChatConfig::load_or_create(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "nick: bob\ninitial_peers: 0\n").unwrap();

        let config = ChatConfig::load_or_create(&path).unwrap();
        assert_eq!(config.nick, "bob");
        assert_eq!(config.initial_peers, 0);
        assert_eq!(config.content_topic, DEFAULT_CONTENT_TOPIC);
    }

    #[test]
    fn invalid_file_loads_but_does_not_validate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "content_topic: chat\n").unwrap();
        let config = ChatConfig::load_or_create(&path).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidContentTopic(_))
        ));
    }

    #[test]
    fn blank_nick_in_file_can_be_overridden() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "nick: \"\"\n").unwrap();

        let mut config = ChatConfig::load_or_create(&path).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::BlankNick)));
        config.nick = "bob".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unparsable_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "initial_peers: many\n").unwrap();
        assert!(matches!(
            ChatConfig::load_or_create(&path),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[rstest]
    #[case("/toy-chat/2/huilong/proto", true)]
    #[case("/app/1/room/json", true)]
    #[case("toy-chat/2/huilong/proto", false)]
    #[case("/toy-chat/2/huilong", false)]
    #[case("/toy-chat//huilong/proto", false)]
    #[case("/toy-chat/2/huilong/proto/extra", false)]
    fn content_topic_format(#[case] topic: &str, #[case] valid: bool) {
        assert_eq!(validate_content_topic(topic).is_ok(), valid);
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("bob", true)]
    fn nick_must_not_be_blank(#[case] nick: &str, #[case] valid: bool) {
        let config = ChatConfig {
            nick: nick.to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate().is_ok(), valid);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let config = ChatConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
