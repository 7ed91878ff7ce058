//! Quiz configuration.
//!
//! ```toml
//! preview_limit = 3
//!
//! [[overrides]]
//! name = "cryo-sword-traveler"
//! survivors = ["Skirk"]
//! conditions = [
//!     { test = "equals", attribute = "element", value = "Cryo" },
//!     { test = "equals", attribute = "weapon", value = "Sword" },
//!     { test = "equals", attribute = "region", value = "Traveler" },
//! ]
//! ```
//!
//! Every field is optional. Supplying `overrides` replaces the builtin rules.

use character_catalog::Catalog;
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::filter::OverridePolicy;

/// Candidates listed in a multi-candidate guess before "and N more".
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Maximum number of candidates shown when several remain.
    pub preview_limit: usize,

    /// Narrative overrides in priority order.
    pub overrides: OverridePolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            overrides: OverridePolicy::builtin(),
        }
    }
}

impl QuizConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, QuizError> {
        Ok(toml::from_str(source)?)
    }

    /// Check that every override survivor exists in the catalog.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), QuizError> {
        for rule in self.overrides.rules() {
            if let Some(name) = rule.survivors.iter().find(|name| !catalog.contains(name)) {
                return Err(QuizError::UnknownSurvivor {
                    rule: rule.name.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }
}
