mod route_api;
mod suggestion_api;

use std::env;

use crate::api::API;

const DEFAULT_PHOTON_BASE: &str = "https://photon.komoot.io";
const DEFAULT_OSRM_BASE: &str = "https://router.project-osrm.org";

#[derive(Clone, Debug)]
pub struct Config {
    pub photon_base: String,
    pub osrm_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photon_base: DEFAULT_PHOTON_BASE.into(),
            osrm_base: DEFAULT_OSRM_BASE.into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            photon_base: env::var("TRAILHEAD_PHOTON_BASE")
                .unwrap_or_else(|_| DEFAULT_PHOTON_BASE.into()),
            osrm_base: env::var("TRAILHEAD_OSRM_BASE")
                .unwrap_or_else(|_| DEFAULT_OSRM_BASE.into()),
        }
    }
}

#[derive(Debug)]
pub struct Engine {
    client: reqwest::Client,
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl API for Engine {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_public_endpoints() {
        let config = Config::default();

        assert_eq!(config.photon_base, "https://photon.komoot.io");
        assert_eq!(config.osrm_base, "https://router.project-osrm.org");
    }
}
