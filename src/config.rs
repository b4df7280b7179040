use crate::namespace::Namespaces;
use ::config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

static DEFAULT: &str = std::include_str!("../data/default.toml");

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// SPARQL endpoint, for example `http://dbpedia.org/sparql/`
    pub endpoint: String,
    /// value of the format query parameter
    pub format: String,
    /// prepended to Wikipedia article titles
    pub resource_base: String,
    /// transport timeout in seconds
    pub timeout: u64,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    #[serde(default)]
    pub namespaces: Namespaces,
}

impl Config {
    /// Embedded defaults, overridden by data/config.toml if it exists, overridden by DBPSUM_* environment variables.
    pub fn load() -> Result<Self, ConfigError> { Self::load_from("data/config.toml") }

    /// Like [Config::load] with another optional configuration file.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        ::config::Config::builder()
            .add_source(File::from_str(DEFAULT, FileFormat::Toml))
            .add_source(File::new(path, FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("dbpsum"))
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    /// Embedded defaults only, ignores files and environment.
    fn default() -> Self {
        ::config::Config::builder()
            .add_source(File::from_str(DEFAULT, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("embedded default configuration is invalid")
    }
}
