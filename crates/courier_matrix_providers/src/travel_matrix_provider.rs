use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    synthetic::{DEFAULT_SYNTHETIC_MAX_SECS, DEFAULT_SYNTHETIC_MIN_SECS},
    travel_matrices::TravelMatrices,
};

#[derive(Deserialize, Serialize, JsonSchema, Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Driving => "driving",
                TravelMode::Walking => "walking",
                TravelMode::Bicycling => "bicycling",
            }
        )
    }
}

#[derive(Deserialize, Serialize, JsonSchema, Clone, Debug, Hash)]
pub enum TravelMatrixProvider {
    /// https://developers.google.com/maps/documentation/distance-matrix
    GoogleDistanceMatrix {
        #[serde(default)]
        mode: TravelMode,
    },

    Synthetic {
        #[serde(default = "default_synthetic_min_secs")]
        min_secs: i64,
        #[serde(default = "default_synthetic_max_secs")]
        max_secs: i64,
        #[serde(default)]
        seed: u64,
    },

    Custom {
        matrices: TravelMatrices,
    },
}

impl TravelMatrixProvider {
    /// Whether fetched matrices are worth persisting in a cache.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, TravelMatrixProvider::GoogleDistanceMatrix { .. })
    }
}

fn default_synthetic_min_secs() -> i64 {
    DEFAULT_SYNTHETIC_MIN_SECS
}

fn default_synthetic_max_secs() -> i64 {
    DEFAULT_SYNTHETIC_MAX_SECS
}
