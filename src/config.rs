use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";
const ENV_PREFIX: &str = "STOREFRONT_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub basic: BasicConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub loglevel: String,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            body_limit: 64 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory with `brands.json`, `products.json` and `users.json`.
    /// `None` serves the bundled seed data.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Defaults, then the TOML file, then `STOREFRONT_*` env vars (`__` separates sections).
    pub fn load() -> Result<Self, figment::Error> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::figment(path).extract()
    }

    pub fn figment(path: impl Into<PathBuf>) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.into()))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .ignore(&["CONFIG"])
                    .split("__"),
            )
    }
}
