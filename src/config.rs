//! Engine configuration.
//!
//! All stochastic layers are tunable: densities for the two dense event
//! types, the occurrence probability for gull calls, and an optional master
//! seed. Zeroing the densities and the probability leaves only the
//! deterministic swell and ambient layers, which is how the layer-additivity
//! property is tested.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for one soundscape render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OceanConfig {
    /// Master seed. `None` draws one from OS entropy per render.
    pub seed: Option<u64>,
    /// Average wave breaks per second
    pub break_density: f32,
    /// Average tidal-pool events per second
    pub pool_density: f32,
    /// Probability that any gull calls occur in a render
    pub gull_probability: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            seed: None,
            break_density: 8.0,
            pool_density: 15.0,
            gull_probability: 0.7,
        }
    }
}

impl OceanConfig {
    /// Default layers with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Seeded config with every stochastic layer disabled; the render then
    /// contains only the swell and ambient contributions.
    pub fn deterministic_only(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            break_density: 0.0,
            pool_density: 0.0,
            gull_probability: 0.0,
        }
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
