// File: src/config.rs
// Purpose: Construction-time configuration for the validation engine

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::error::Result;

/// Classes added to a field that failed validation
pub const DEFAULT_ERROR_CLASSES: &[&str] = &["has-error", "is-invalid", "pluto-error"];

/// Engine configuration
///
/// Both maps replace the built-in defaults wholesale when present; there is no
/// merging with the default catalog.
///
/// ```
/// use pluto_validation_core::PlutoConfig;
///
/// let config = PlutoConfig::from_json(r#"{ "errorClasses": ["bad"] }"#).unwrap();
/// assert_eq!(config.error_classes(), vec!["bad".to_string()]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlutoConfig {
    /// Rule name to message text
    #[serde(default)]
    pub error_messages: Option<HashMap<String, String>>,

    #[serde(default)]
    pub error_classes: Option<Vec<String>>,

    /// Prefix for generated form ids (default: "pluto")
    #[serde(default)]
    pub id_namespace: Option<String>,
}

impl PlutoConfig {
    /// Parse a configuration from its JSON form
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn catalog(&self) -> RuleCatalog {
        match &self.error_messages {
            Some(messages) => RuleCatalog::from_messages(messages.clone()),
            None => RuleCatalog::default(),
        }
    }

    pub fn error_classes(&self) -> Vec<String> {
        match &self.error_classes {
            Some(classes) => classes.clone(),
            None => DEFAULT_ERROR_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn id_namespace(&self) -> &str {
        self.id_namespace.as_deref().unwrap_or("pluto")
    }
}
