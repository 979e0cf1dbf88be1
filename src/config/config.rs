use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{distance::prefix::ProximityParams, matcher::matcher::MatchParams};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dictionary_path: String,
    pub min_prefix_length: usize, // Minimum length of the queried word for prefix matching
    pub max_length_gap: usize, // Minimum candidate length and maximum length gap for prefix matching
    pub min_proximity: f32,
    pub max_edit_distance: usize,
}

impl Default for Config {
    fn default() -> Self {
        let params = MatchParams::default();
        Config {
            dictionary_path: "lexique".to_string(),
            min_prefix_length: params.proximity.min_length,
            max_length_gap: params.proximity.max_length,
            min_proximity: params.min_proximity,
            max_edit_distance: params.max_edit_distance,
        }
    }
}

impl Config {
    pub fn match_params(&self) -> MatchParams {
        MatchParams {
            proximity: ProximityParams {
                min_length: self.min_prefix_length,
                max_length: self.max_length_gap,
            },
            min_proximity: self.min_proximity,
            max_edit_distance: self.max_edit_distance,
        }
    }
}

/// Reads the JSON config at `path`, falling back to defaults when it is
/// missing or cannot be parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "config not found, using default configuration");
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                return config;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error parsing config, using default configuration");
            }
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "error reading config, using default configuration");
        }
    }

    Config::default()
}
