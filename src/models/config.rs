use crate::KitchenError;
use serde::{Deserialize, Serialize};

/// Kitchen-wide settings.
///
/// The console programs run on defaults; `from_toml_str` exists for
/// embedders that carry their own settings file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KitchenConfig {
    pub kitchen_name: String,
    /// Whether preparation notices are printed as items are constructed.
    pub announce_preparation: bool,
}

impl KitchenConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, KitchenError> {
        toml::from_str(raw).map_err(|e| KitchenError::config(e.to_string()))
    }
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            kitchen_name: "kitchen".to_string(),
            announce_preparation: true,
        }
    }
}
