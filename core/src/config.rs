use crate::error::{EnhancerError, Result};
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Selectors, ids and keys the enhancer expects from the page markup.
///
/// Every field has a default, so a page only has to override what differs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub code_selector: String,
    pub theme_attribute: String,
    pub theme_storage_key: String,
    pub theme_toggle_id: String,
    pub theme_icon_id: String,
    pub copy_selector: String,
    pub copy_target_attribute: String,
}

impl PageConfig {
    /// Id of the optional `<script type="application/json">` element holding
    /// overrides.
    pub const ELEMENT_ID: &'static str = "enhancer-config";

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| EnhancerError::InvalidConfig(err.to_string()))
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            code_selector: "pre code".into(),
            theme_attribute: "data-bs-theme".into(),
            theme_storage_key: "theme".into(),
            theme_toggle_id: "theme-toggle".into(),
            theme_icon_id: "theme-icon".into(),
            copy_selector: ".copy-btn".into(),
            copy_target_attribute: "data-target".into(),
        }
    }
}
