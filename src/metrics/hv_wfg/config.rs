use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::HvError;

/// The options of the WFG algorithm.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WfgConfig {
    /// The number of dimensions at which the recursion stops and the remaining points are passed
    /// to the terminal solver. This must be at least `2`.
    pub stop_dimension: usize,
}

impl Default for WfgConfig {
    fn default() -> Self {
        Self { stop_dimension: 2 }
    }
}

impl WfgConfig {
    /// Parse the options from a JSON string. Missing fields take their default value.
    ///
    /// # Arguments
    ///
    /// * `data`: The JSON string.
    ///
    /// returns: `Result<WfgConfig, HvError>`
    pub fn from_json(data: &str) -> Result<Self, HvError> {
        serde_json::from_str(data)
            .map_err(|e| HvError::Config(format!("Cannot parse the JSON data because: {e}")))
    }

    /// Read the options from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<WfgConfig, HvError>`
    pub fn from_file(file: &Path) -> Result<Self, HvError> {
        let data = fs::read_to_string(file).map_err(|e| {
            HvError::Config(format!("Cannot read the file '{}' because: {e}", file.display()))
        })?;
        Self::from_json(&data)
    }

    /// Serialise the options to a JSON string.
    ///
    /// returns: `Result<String, HvError>`
    pub fn to_json(&self) -> Result<String, HvError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HvError::Config(format!("Cannot serialise the options because: {e}")))
    }
}
