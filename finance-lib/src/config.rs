use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs};

const DEFAULT_DATABASE_URL: &str = "sqlite://data.db";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 1;

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_owned()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Config {
    /// Reads `config.toml` if one can be found, otherwise falls back to the environment.
    pub fn load() -> Result<Config, anyhow::Error> {
        match get_config_file() {
            Some(path) => Config::from_file(path),
            None => Config::from_env(),
        }
    }

    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(&path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        Config::from_toml(&config)
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        toml::from_str(config).context("Unable to parse config")
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let port = read_env("PORT", DEFAULT_PORT)?;
        let max_connections = read_env("MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        Ok(Config {
            database_url,
            port,
            max_connections,
        })
    }
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

fn read_env<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Unable to parse {} value", key)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[::core::prelude::v1::test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(
            config,
            Config {
                database_url: "sqlite://data.db".to_owned(),
                port: 3000,
                max_connections: 1,
            }
        );
    }

    #[::core::prelude::v1::test]
    fn config_values_override_defaults() {
        let config = Config::from_toml(
            r#"
            database_url = "sqlite:///var/lib/finance/data.db"
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.database_url, "sqlite:///var/lib/finance/data.db");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 1);
    }

    #[::core::prelude::v1::test]
    fn bad_port_is_rejected() {
        assert!(Config::from_toml("port = \"eighty\"").is_err());
    }
}
