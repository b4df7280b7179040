use crate::config::Config;
use serde::Serialize;
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, Debug)]
pub struct About {
    pub cargo_pkg_version: &'static str,
    pub endpoint: String,
    pub num_namespaces: usize,
}

impl About {
    pub fn new(config: &Config) -> About { About { cargo_pkg_version: VERSION, endpoint: config.endpoint.clone(), num_namespaces: config.namespaces.len() } }
}
